//! Actions module
//!
//! This module defines all actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput, ViewContext) that views translate to screen-specific actions
//! - Global actions that affect the entire application
//! - Domain actions that are already targeted to a particular slice of state

// Shared action types
pub mod context_action;
pub mod global;
pub mod navigation;
pub mod text_input;

// Domain action types
pub mod bootstrap;
pub mod search;
pub mod sort;
pub mod stories;
pub mod story_list;

pub use bootstrap::BootstrapAction;
pub use context_action::ContextAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use search::{SearchAction, TermEdit};
pub use sort::SortAction;
pub use stories::StoriesAction;
pub use story_list::StoryListAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by domain
///
/// Actions are categorized as:
/// - `Navigate` / `TextInput` / `ViewContext`: Generic actions that need translation by the active view
/// - `Global`: Application-wide actions (quit, view management, raw keys)
/// - Domain variants: Already targeted to a specific reducer or middleware
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),
    /// Context-sensitive action - will be translated by active view
    ViewContext(ContextAction),

    // Global actions (no translation needed)
    /// Global application actions
    Global(GlobalAction),

    // Domain actions (already targeted)
    /// Startup sequence
    Bootstrap(BootstrapAction),
    /// Search term, history and query URL actions
    Search(SearchAction),
    /// Fetch lifecycle and removal of stories
    Stories(StoriesAction),
    /// Sort selection of the story table
    Sort(SortAction),
    /// Cursor and item actions of the story table
    StoryList(StoryListAction),
}
