//! reqwest-based search client
//!
//! Direct implementation of the `StoryClient` trait against the public
//! Hacker News search index. No caching, no retries.

use crate::client::StoryClient;
use crate::error::ClientError;
use crate::types::SearchResponse;
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Search client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct AlgoliaClient {
    http: reqwest::Client,
}

impl AlgoliaClient {
    /// Create a client with the default request timeout
    pub fn new() -> Result<Self, ClientError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hacker-stories/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::from_http(http))
    }

    /// Use an already configured `reqwest` client
    pub fn from_http(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl StoryClient for AlgoliaClient {
    async fn fetch_stories(&self, url: &str) -> Result<SearchResponse, ClientError> {
        debug!("Fetching stories from {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let page: SearchResponse = serde_json::from_str(&body)?;

        debug!("Received {} hits (page {}) from {}", page.hits.len(), page.page, url);
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchUrlBuilder;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer exactly one request with `status` and `body`, returning the API base
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/api/v1", addr)
    }

    fn local_client() -> AlgoliaClient {
        let http = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        AlgoliaClient::from_http(http)
    }

    #[tokio::test]
    async fn test_decodes_success() {
        let base = serve_once(
            "200 OK",
            r#"{"hits":[{"objectID":"1","title":"React","url":null}],"page":3}"#,
        )
        .await;
        let url = SearchUrlBuilder::new(base).build_url("react", 3);

        let page = local_client().fetch_stories(&url).await.unwrap();
        assert_eq!(page.page, 3);
        assert_eq!(page.hits.len(), 1);
        assert_eq!(page.hits[0].object_id, "1");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let base = serve_once("500 Internal Server Error", "").await;
        let url = SearchUrlBuilder::new(base).build_url("react", 0);

        let err = local_client().fetch_stories(&url).await.unwrap_err();
        assert!(
            matches!(err, ClientError::Status { status: 500, url: ref failed } if *failed == url),
            "unexpected error: {:?}",
            err
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let base = serve_once("200 OK", r#"{"page":0}"#).await;
        let url = SearchUrlBuilder::new(base).build_url("react", 0);

        let err = local_client().fetch_stories(&url).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)), "unexpected error: {:?}", err);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_http_error() {
        // Bind and release a port so nothing listens on it
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = SearchUrlBuilder::new(format!("http://{}", addr)).build_url("react", 0);
        let err = local_client().fetch_stories(&url).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)), "unexpected error: {:?}", err);
    }
}
