//! Story table actions
//!
//! Actions the story table view translates generic navigation and context
//! actions into.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryListAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Open the given link in the system browser
    OpenInBrowser(String),
}
