//! Story List State

use chrono::{DateTime, Local};

/// Table state of the story list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryListState {
    /// Cursor position within the sorted projection
    pub selected: usize,
    /// Time of the last applied page
    pub last_updated: Option<DateTime<Local>>,
}
