//! Browser Middleware
//!
//! Opens story links in the system browser.

use crate::actions::{Action, StoryListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser::open_url;

#[derive(Debug, Default)]
pub struct BrowserMiddleware;

impl BrowserMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for BrowserMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if let Action::StoryList(StoryListAction::OpenInBrowser(url)) = action {
            log::info!("Opening {} in browser", url);
            open_url(url);
            return false;
        }
        true
    }
}
