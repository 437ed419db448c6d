//! Search Reducer

use crate::actions::SearchAction;
use crate::state::SearchState;

/// Reduce the search slice
///
/// `Submit`, `LoadMore` and `PickHistory` only trigger the search
/// middleware; the state changes once it answers with `UrlIssued`.
pub fn reduce_search(mut state: SearchState, action: &SearchAction) -> SearchState {
    match action {
        SearchAction::SelectHistory(term) => {
            state.term = term.clone();
        }
        SearchAction::Edit(edit) => {
            state.term = edit.apply(&state.term);
        }
        SearchAction::UrlIssued(url) => {
            state.urls.push(url.clone());
        }
        SearchAction::Submit | SearchAction::LoadMore | SearchAction::PickHistory(_) => {}
    }

    state
}
