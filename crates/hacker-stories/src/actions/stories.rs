//! Stories actions
//!
//! Fetch lifecycle of the story list plus removal of single stories.
//! Lifecycle actions carry the query URL they were issued for, so a
//! response that arrives after the user has moved on to another query can
//! be recognised and dropped.

use crate::domain_models::{StoriesPage, Story};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// A request for `url` has started
    FetchInit { url: String },
    /// The request for `url` returned a page of stories
    FetchSuccess { url: String, payload: StoriesPage },
    /// The request for `url` failed
    FetchFailure { url: String },
    /// Drop a story from the list
    Remove(Story),
}

impl StoriesAction {
    /// Query URL of a lifecycle action, `None` for actions that are not
    /// tied to a request
    pub fn url(&self) -> Option<&str> {
        match self {
            StoriesAction::FetchInit { url }
            | StoriesAction::FetchSuccess { url, .. }
            | StoriesAction::FetchFailure { url } => Some(url),
            StoriesAction::Remove(_) => None,
        }
    }
}
