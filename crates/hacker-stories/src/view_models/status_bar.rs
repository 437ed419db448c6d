//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar: the fetch status on
//! the left, key hints on the right.

use crate::command_id::CommandId;
use crate::domain_models::SortKey;
use crate::state::AppState;
use ratatui::style::{Color, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// Icon for the status
    pub emoji: &'static str,
    /// The message text
    pub message: String,
    pub message_style: Style,
    /// Time of the last loaded page (e.g., "14:32:05")
    pub timestamp: String,
    /// Key hints as (keys, label) pairs
    pub hints: Vec<(String, &'static str)>,
    pub hint_key_style: Style,
    pub hint_label_style: Style,
    /// Background color for the bar
    pub bg_color: Color,
}

/// Commands advertised in the status bar
const HINTS: [(CommandId, &str); 6] = [
    (CommandId::SearchEdit, "search"),
    (CommandId::SearchLoadMore, "more"),
    (CommandId::StoryOpen, "open"),
    (CommandId::StoryRemove, "remove"),
    (CommandId::Sort(SortKey::Title), "sort"),
    (CommandId::HelpToggle, "help"),
];

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let stories = &state.stories;

        let (emoji, message, message_style) = if stories.is_error {
            ("✗", "Something went wrong ...".to_string(), theme.error())
        } else if stories.is_loading {
            ("⟳", "Loading ...".to_string(), theme.loading())
        } else if state.search.current_url().is_none() {
            ("👋", "Welcome to Hacker Stories".to_string(), theme.muted())
        } else {
            (
                "✓",
                format!("{} stories, page {}", stories.data.len(), stories.page + 1),
                theme.success(),
            )
        };

        let hints = HINTS
            .iter()
            .filter_map(|(command, label)| {
                let keys = if let CommandId::Sort(_) = command {
                    // One hint for the whole sort family
                    Some("t/a/c/p/n".to_string())
                } else {
                    state.keymap.hint_for_command(*command).map(str::to_string)
                };
                keys.map(|keys| (keys, *label))
            })
            .collect();

        Self {
            emoji,
            message,
            message_style,
            timestamp: state
                .story_list
                .last_updated
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_default(),
            hints,
            hint_key_style: theme.key_hint().bg(theme.bg_secondary),
            hint_label_style: theme.status_bar(),
            bg_color: theme.bg_secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        let mut state = AppState::default();
        assert_eq!(
            StatusBarViewModel::from_state(&state).message,
            "Welcome to Hacker Stories"
        );

        state.stories.is_loading = true;
        assert_eq!(StatusBarViewModel::from_state(&state).message, "Loading ...");

        state.stories.is_error = true;
        assert_eq!(
            StatusBarViewModel::from_state(&state).message,
            "Something went wrong ..."
        );
    }

    #[test]
    fn test_hints_come_from_keymap() {
        let vm = StatusBarViewModel::from_state(&AppState::default());
        assert!(vm.hints.contains(&("m".to_string(), "more")));
        assert!(vm.hints.contains(&("x".to_string(), "remove")));
        assert!(vm.hints.contains(&("?".to_string(), "help")));
    }
}
