//! Command identifiers
//!
//! Every command a key can be bound to. A command knows the action it
//! produces and how it is described in the help panel.

use crate::actions::{
    Action, ContextAction, GlobalAction, NavigationAction, SearchAction, SortAction,
};
use crate::domain_models::{SortKey, LAST_SEARCHES_LIMIT};
use crate::views::{HelpView, SearchInputView};

/// Unique identifier for each command in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,

    // === Search ===
    /// Open the search input
    SearchEdit,
    /// Fetch the next page of the current query
    SearchLoadMore,
    /// Re-run a search history entry (zero-based)
    SearchHistory(usize),

    // === Stories ===
    /// Open the focused story in the browser
    StoryOpen,
    /// Remove the focused story from the list
    StoryRemove,

    // === Sorting ===
    Sort(SortKey),

    // === General ===
    /// Toggle the help panel
    HelpToggle,
    /// Close the current view/panel
    GlobalClose,
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::SearchEdit => Action::Global(GlobalAction::PushView(Box::new(
                SearchInputView::new(),
            ))),
            Self::SearchLoadMore => Action::Search(SearchAction::LoadMore),
            Self::SearchHistory(index) => Action::Search(SearchAction::PickHistory(index)),

            Self::StoryOpen => Action::ViewContext(ContextAction::Confirm),
            Self::StoryRemove => Action::ViewContext(ContextAction::Remove),

            Self::Sort(key) => Action::Sort(SortAction::Toggle(key)),

            Self::HelpToggle => Action::Global(GlobalAction::PushView(Box::new(HelpView::new()))),
            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Help panel section this command is listed under
    pub fn category(&self) -> &'static str {
        match self {
            Self::NavigateNext
            | Self::NavigatePrevious
            | Self::NavigateToTop
            | Self::NavigateToBottom => "Navigation",
            Self::SearchEdit | Self::SearchLoadMore | Self::SearchHistory(_) => "Search",
            Self::StoryOpen | Self::StoryRemove => "Stories",
            Self::Sort(_) => "Sorting",
            Self::HelpToggle | Self::GlobalClose | Self::GlobalQuit => "General",
        }
    }

    /// Description shown in the help panel
    pub fn description(&self) -> String {
        match self {
            Self::NavigateNext => "Move selection down".to_string(),
            Self::NavigatePrevious => "Move selection up".to_string(),
            Self::NavigateToTop => "Jump to the first story".to_string(),
            Self::NavigateToBottom => "Jump to the last story".to_string(),
            Self::SearchEdit => "Edit the search term".to_string(),
            Self::SearchLoadMore => "Load more stories".to_string(),
            Self::SearchHistory(index) => format!(
                "Search history entry {} of {}",
                index + 1,
                LAST_SEARCHES_LIMIT
            ),
            Self::StoryOpen => "Open story in browser".to_string(),
            Self::StoryRemove => "Remove story from the list".to_string(),
            Self::Sort(SortKey::None) => "Clear sorting".to_string(),
            Self::Sort(key) => format!("Sort by {}", key.label().to_lowercase()),
            Self::HelpToggle => "Toggle this help".to_string(),
            Self::GlobalClose => "Close panel / quit".to_string(),
            Self::GlobalQuit => "Quit".to_string(),
        }
    }
}
