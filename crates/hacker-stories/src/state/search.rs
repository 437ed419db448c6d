//! Search State

use crate::domain_models::last_searches;

/// Search term being edited plus every query URL issued so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Current content of the search input
    pub term: String,
    /// Issued query URLs, oldest first; the last one is the current target
    pub urls: Vec<String>,
}

impl SearchState {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            urls: Vec::new(),
        }
    }

    /// The query URL whose results the list should show
    pub fn current_url(&self) -> Option<&str> {
        self.urls.last().map(String::as_str)
    }

    /// Recently searched terms, newest first
    pub fn last_searches(&self) -> Vec<String> {
        last_searches(&self.urls)
    }
}
