//! Story List Reducer
//!
//! Cursor movement over the displayed (sorted) story list.

use crate::actions::StoryListAction;
use crate::state::StoryListState;

/// Reduce the story table state
///
/// `len` is the number of stories currently displayed. Navigation wraps
/// around at both ends.
pub fn reduce_story_list(
    mut state: StoryListState,
    action: &StoryListAction,
    len: usize,
) -> StoryListState {
    match action {
        StoryListAction::NavigateNext => {
            if len > 0 {
                state.selected = (state.selected + 1) % len;
            }
        }
        StoryListAction::NavigatePrevious => {
            if len > 0 {
                state.selected = if state.selected == 0 {
                    len - 1
                } else {
                    state.selected - 1
                };
            }
        }
        StoryListAction::NavigateToTop => {
            state.selected = 0;
        }
        StoryListAction::NavigateToBottom => {
            state.selected = len.saturating_sub(1);
        }
        StoryListAction::OpenInBrowser(_) => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(selected: usize) -> StoryListState {
        StoryListState {
            selected,
            ..Default::default()
        }
    }

    #[test]
    fn test_navigate_wraps() {
        let state = reduce_story_list(at(2), &StoryListAction::NavigateNext, 3);
        assert_eq!(state.selected, 0);

        let state = reduce_story_list(state, &StoryListAction::NavigatePrevious, 3);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_top_and_bottom() {
        let state = reduce_story_list(at(1), &StoryListAction::NavigateToBottom, 5);
        assert_eq!(state.selected, 4);

        let state = reduce_story_list(state, &StoryListAction::NavigateToTop, 5);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_empty_list() {
        let state = reduce_story_list(at(0), &StoryListAction::NavigateNext, 0);
        assert_eq!(state.selected, 0);

        let state = reduce_story_list(state, &StoryListAction::NavigateToBottom, 0);
        assert_eq!(state.selected, 0);
    }
}
