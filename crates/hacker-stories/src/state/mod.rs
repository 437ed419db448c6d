//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod search;
mod stories;
mod story_list;

pub use app::AppState;
pub use search::SearchState;
pub use stories::StoriesState;
pub use story_list::StoryListState;
