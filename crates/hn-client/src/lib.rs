//! Hacker News search index client
//!
//! This crate provides a trait-based client for the public Hacker News
//! search index (hn.algolia.com), together with the URL builder that
//! produces and parses the query URLs the application tracks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               StoryClient trait                  │
//! │  - fetch_stories(url)                            │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │  AlgoliaClient  │
//!              │  (reqwest)      │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use hn_client::{AlgoliaClient, SearchUrlBuilder, StoryClient};
//!
//! # async fn example() -> Result<(), hn_client::ClientError> {
//! let urls = SearchUrlBuilder::default();
//! let client = AlgoliaClient::new()?;
//!
//! let url = urls.build_url("rust", 0);
//! let page = client.fetch_stories(&url).await?;
//! println!("{} hits on page {}", page.hits.len(), page.page);
//! # Ok(())
//! # }
//! ```

pub mod algolia_client;
pub mod client;
pub mod error;
pub mod search_url;
pub mod types;

/// Default base of the Hacker News search API
pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1";

pub use algolia_client::AlgoliaClient;
pub use client::StoryClient;
pub use error::ClientError;
pub use search_url::SearchUrlBuilder;
pub use types::{SearchResponse, StoryHit};
