use crate::actions::{Action, StoriesAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // A whole page of stories is too noisy for the log
            Action::Stories(StoriesAction::FetchSuccess { url, payload }) => {
                log::debug!(
                    "Action: Stories(FetchSuccess {{ url: {}, page: {}, hits: {} }})",
                    url,
                    payload.page,
                    payload.list.len()
                );
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
