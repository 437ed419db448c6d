//! Bootstrap Middleware
//!
//! Runs the initial search once the terminal is up.

use crate::actions::{Action, BootstrapAction, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct BootstrapMiddleware;

impl BootstrapMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for BootstrapMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Bootstrap(BootstrapAction::Start) = action {
            log::info!("Bootstrap: initial search for '{}'", state.search.term);
            dispatcher.dispatch(Action::Search(SearchAction::Submit));
            return false;
        }
        true
    }
}
