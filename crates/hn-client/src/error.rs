//! Client error type

use thiserror::Error;

/// Errors that can occur while fetching stories
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}
