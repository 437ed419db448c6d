//! Story client trait
//!
//! Defines the `StoryClient` trait that all client implementations must
//! satisfy. The application only depends on this trait, which keeps the
//! fetch orchestration testable without network access.

use crate::error::ClientError;
use crate::types::SearchResponse;
use async_trait::async_trait;

/// Hacker News search client trait
///
/// Implementations fetch one page of search results for a fully built
/// query URL (see [`crate::SearchUrlBuilder`]).
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use hn_client::{StoryClient, SearchResponse};
///
/// async fn first_page(client: &dyn StoryClient, url: &str) -> Result<SearchResponse, ClientError> {
///     client.fetch_stories(url).await
/// }
/// ```
#[async_trait]
pub trait StoryClient: Send + Sync {
    /// Fetch one page of stories for the given query URL
    ///
    /// # Returns
    ///
    /// The decoded response body, or an error if the request failed,
    /// the server answered with a non-success status, or the body did
    /// not have the expected `{ hits, page }` shape.
    async fn fetch_stories(&self, url: &str) -> Result<SearchResponse, ClientError>;
}
