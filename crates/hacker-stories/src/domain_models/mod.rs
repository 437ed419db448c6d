//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from UI state.

pub mod search_history;
pub mod sort;
pub mod story;

pub use search_history::{last_searches, LAST_SEARCHES_LIMIT};
pub use sort::{sort_stories, SortKey, SortSelection};
pub use story::{Story, StoriesPage};
