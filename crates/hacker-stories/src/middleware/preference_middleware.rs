//! Preference Middleware
//!
//! Persists the search term on every change so the next start opens with
//! the same search. Writes happen on the background thread; a failed write
//! is logged and the term stays in memory.

use crate::actions::{Action, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use hacker_stories_config::{PreferenceStore, SemiPersistentState};

pub struct PreferenceMiddleware<S: PreferenceStore> {
    search_term: SemiPersistentState<S>,
}

impl<S: PreferenceStore> PreferenceMiddleware<S> {
    pub fn new(search_term: SemiPersistentState<S>) -> Self {
        Self { search_term }
    }

    fn persist(&mut self, term: String) {
        if let Err(e) = self.search_term.set(term) {
            log::error!(
                "Failed to persist preference '{}': {:#}",
                self.search_term.key(),
                e
            );
        }
    }
}

impl<S: PreferenceStore> Middleware for PreferenceMiddleware<S> {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Search(SearchAction::SelectHistory(term)) => self.persist(term.clone()),
            Action::Search(SearchAction::Edit(edit)) => {
                let term = edit.apply(self.search_term.value());
                self.persist(term);
            }
            _ => {}
        }
        true
    }
}
