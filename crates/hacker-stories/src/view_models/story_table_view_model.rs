//! View model for the story table
//!
//! Separates presentation logic from domain models and view rendering.
//! Pre-computes display text in the sorted order and marks the active
//! sort column.

use crate::domain_models::{SortKey, SortSelection, Story};
use crate::state::AppState;

/// What the table area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryTableContent {
    Loading,
    Error,
    /// Fetched, but nothing to show
    Empty,
    Rows,
}

/// View model for one header cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCellViewModel {
    /// Column label including the sort arrow when active
    pub label: String,
    /// Whether the table is sorted by this column
    pub active: bool,
}

/// View model for a single story row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRowViewModel {
    pub title: String,
    pub author: String,
    pub comments: String,
    pub points: String,
}

/// View model for the whole table
#[derive(Debug, Clone)]
pub struct StoryTableViewModel {
    pub content: StoryTableContent,
    pub header: Vec<HeaderCellViewModel>,
    pub rows: Vec<StoryRowViewModel>,
    /// Cursor position within `rows`
    pub selected_index: usize,
    /// Block title, e.g. "Stories (20, page 1)"
    pub title: String,
}

/// Table columns with the key that sorts them
const COLUMNS: [SortKey; 4] = [
    SortKey::Title,
    SortKey::Author,
    SortKey::Comment,
    SortKey::Point,
];

impl StoryTableViewModel {
    /// Transform state into display-ready view model
    pub fn from_state(state: &AppState) -> Self {
        let stories = &state.stories;

        let content = if stories.is_error {
            StoryTableContent::Error
        } else if stories.is_loading {
            StoryTableContent::Loading
        } else if stories.data.is_empty() {
            StoryTableContent::Empty
        } else {
            StoryTableContent::Rows
        };

        let rows = state
            .visible_stories()
            .into_iter()
            .map(Self::build_row)
            .collect();

        Self {
            content,
            header: Self::build_header(&state.sort),
            rows,
            selected_index: state.story_list.selected,
            title: format!(" Stories ({}, page {}) ", stories.data.len(), stories.page + 1),
        }
    }

    fn build_header(sort: &SortSelection) -> Vec<HeaderCellViewModel> {
        COLUMNS
            .iter()
            .map(|key| {
                let active = sort.key == *key;
                let label = if active {
                    let arrow = if sort.is_reverse { "↓" } else { "↑" };
                    format!("{} {}", key.label(), arrow)
                } else {
                    key.label().to_string()
                };
                HeaderCellViewModel { label, active }
            })
            .collect()
    }

    fn build_row(story: &Story) -> StoryRowViewModel {
        StoryRowViewModel {
            title: story.title.clone(),
            author: story.author.clone(),
            comments: story.num_comments.to_string(),
            points: story.points.to_string(),
        }
    }
}
