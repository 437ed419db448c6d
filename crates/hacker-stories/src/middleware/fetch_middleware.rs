//! Fetch Middleware
//!
//! Fetches stories whenever a new query URL becomes the target:
//! `UrlIssued(url)` dispatches `FetchInit { url }` and starts the request
//! on the middleware's tokio runtime. The outcome comes back as
//! `FetchSuccess` or `FetchFailure`, tagged with the same URL.

use crate::actions::{Action, SearchAction, StoriesAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::StoriesPage;
use crate::middleware::Middleware;
use crate::state::AppState;
use hn_client::StoryClient;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for story requests
pub struct FetchMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn StoryClient>,
}

impl FetchMiddleware {
    pub fn new(client: Arc<dyn StoryClient>) -> std::io::Result<Self> {
        Ok(Self {
            runtime: Runtime::new()?,
            client,
        })
    }

    fn fetch(&self, url: &str, dispatcher: &Dispatcher) {
        dispatcher.dispatch(Action::Stories(StoriesAction::FetchInit {
            url: url.to_string(),
        }));

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let url = url.to_string();

        self.runtime.spawn(async move {
            let outcome = fetch_outcome(client.as_ref(), url).await;
            dispatcher.dispatch(Action::Stories(outcome));
        });
    }
}

/// Run one request and turn it into the matching lifecycle action
///
/// Every failure collapses into `FetchFailure`; the cause only goes to the log.
pub async fn fetch_outcome(client: &dyn StoryClient, url: String) -> StoriesAction {
    match client.fetch_stories(&url).await {
        Ok(response) => {
            let payload = StoriesPage::from(response);
            log::info!(
                "Fetched {} stories (page {}) for {}",
                payload.list.len(),
                payload.page,
                url
            );
            StoriesAction::FetchSuccess { url, payload }
        }
        Err(e) => {
            log::error!("Failed to fetch {}: {}", url, e);
            StoriesAction::FetchFailure { url }
        }
    }
}

impl Middleware for FetchMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Search(SearchAction::UrlIssued(url)) = action {
            self.fetch(url, dispatcher);
        }
        true
    }
}
