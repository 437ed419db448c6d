//! Search Bar View Model
//!
//! The search term with its submit hint, plus the history chips.

use crate::command_id::CommandId;
use crate::state::AppState;

/// One entry of the search history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryChip {
    /// Key that re-runs this search
    pub key: String,
    pub term: String,
}

#[derive(Debug, Clone)]
pub struct SearchBarViewModel {
    pub label: &'static str,
    pub term: String,
    /// Submitting an empty term does nothing, so the hint is greyed out
    pub submit_enabled: bool,
    /// Key hint for editing the term, e.g. "/"
    pub edit_hint: String,
    pub history: Vec<HistoryChip>,
}

impl SearchBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let history = state
            .search
            .last_searches()
            .into_iter()
            .enumerate()
            .map(|(index, term)| HistoryChip {
                key: state
                    .keymap
                    .compact_hint_for_command(CommandId::SearchHistory(index))
                    .unwrap_or_else(|| (index + 1).to_string()),
                term,
            })
            .collect();

        Self {
            label: "Search:",
            term: state.search.term.clone(),
            submit_enabled: !state.search.term.is_empty(),
            edit_hint: state
                .keymap
                .hint_for_command(CommandId::SearchEdit)
                .unwrap_or("/")
                .to_string(),
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hn_client::SearchUrlBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_history_chips_use_history_keys() {
        let urls = SearchUrlBuilder::default();
        let mut state = AppState::new("");
        state.search.urls = vec![urls.build_url("react", 0), urls.build_url("rust", 0)];

        let vm = SearchBarViewModel::from_state(&state);
        assert!(!vm.submit_enabled);
        assert_eq!(
            vm.history,
            vec![
                HistoryChip {
                    key: "1".to_string(),
                    term: "rust".to_string()
                },
                HistoryChip {
                    key: "2".to_string(),
                    term: "react".to_string()
                },
            ]
        );
        assert_eq!(vm.edit_hint, "/");
    }
}
