use crate::actions::{Action, GlobalAction, SearchAction, StoriesAction};
use crate::reducers::{
    search_reducer::reduce_search, sort_reducer::reduce_sort,
    stories_reducer::reduce_stories, story_list_reducer::reduce_story_list,
};
use crate::state::AppState;
use crate::views::ViewId;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => reduce_global(&mut state, global),

        Action::Search(search) => {
            // A submitted search closes the input popup
            if matches!(search, SearchAction::Submit)
                && state.view_stack.last().map(|v| v.view_id()) == Some(ViewId::SearchInput)
            {
                state.view_stack.pop();
            }
            state.search = reduce_search(state.search, search);
        }

        Action::Stories(stories) => {
            if let Some(url) = stories.url() {
                if state.search.current_url() != Some(url) {
                    log::debug!(
                        "Dropping stale {} for {} (current: {:?})",
                        stories_tag(stories),
                        url,
                        state.search.current_url()
                    );
                    return state;
                }
            }

            state.stories = reduce_stories(state.stories, stories);

            if let StoriesAction::FetchSuccess { payload, .. } = stories {
                if payload.page == 0 {
                    state.story_list.selected = 0;
                }
                state.story_list.last_updated = Some(chrono::Local::now());
            }
            clamp_cursor(&mut state);
        }

        Action::Sort(sort) => {
            state.sort = reduce_sort(state.sort, sort);
            state.story_list.selected = 0;
        }

        Action::StoryList(list) => {
            let len = state.stories.data.len();
            state.story_list = reduce_story_list(state.story_list, list, len);
        }

        // Generic actions are translated by middleware before they reach the reducer
        Action::Navigate(_) | Action::TextInput(_) | Action::ViewContext(_) => {}
        Action::Bootstrap(_) => {}
    }

    state
}

fn reduce_global(state: &mut AppState, action: &GlobalAction) {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::PushView(new_view) => {
            // Pushing the view that is already on top closes it instead
            let is_duplicate = state
                .view_stack
                .last()
                .map(|top| top.view_id() == new_view.view_id())
                .unwrap_or(false);

            if is_duplicate {
                log::debug!(
                    "Popping view from the stack, because this view is on top already: {:?}",
                    new_view.view_id()
                );
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        GlobalAction::Close => {
            // Close the top-most view, or quit when only the base view is left
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        GlobalAction::KeyPressed(_) => {}
    }
}

/// Keep the cursor inside the list after it shrank
fn clamp_cursor(state: &mut AppState) {
    let len = state.stories.data.len();
    if state.story_list.selected >= len {
        state.story_list.selected = len.saturating_sub(1);
    }
}

fn stories_tag(action: &StoriesAction) -> &'static str {
    match action {
        StoriesAction::FetchInit { .. } => "FetchInit",
        StoriesAction::FetchSuccess { .. } => "FetchSuccess",
        StoriesAction::FetchFailure { .. } => "FetchFailure",
        StoriesAction::Remove(_) => "Remove",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::SortAction;
    use crate::domain_models::{SortKey, StoriesPage, Story};
    use crate::views::{HelpView, SearchInputView};
    use pretty_assertions::assert_eq;

    const REACT: &str = "https://hn.algolia.com/api/v1/search?query=react&page=0";
    const RUST: &str = "https://hn.algolia.com/api/v1/search?query=rust&page=0";

    fn issued(state: AppState, url: &str) -> AppState {
        reduce(
            state,
            &Action::Search(SearchAction::UrlIssued(url.to_string())),
        )
    }

    fn stories(action: StoriesAction) -> Action {
        Action::Stories(action)
    }

    fn success(url: &str, list: Vec<Story>, page: u32) -> Action {
        stories(StoriesAction::FetchSuccess {
            url: url.to_string(),
            payload: StoriesPage { list, page },
        })
    }

    fn view_ids(state: &AppState) -> Vec<ViewId> {
        state.view_stack.iter().map(|v| v.view_id()).collect()
    }

    #[test]
    fn test_lifecycle_for_current_url_is_applied() {
        let state = issued(AppState::new("react"), REACT);
        let state = reduce(
            state,
            &stories(StoriesAction::FetchInit {
                url: REACT.to_string(),
            }),
        );
        assert!(state.stories.is_loading);

        let state = reduce(state, &success(REACT, vec![Story::new("1", "React")], 0));
        assert!(!state.stories.is_loading);
        assert_eq!(state.stories.data, vec![Story::new("1", "React")]);
        assert!(state.story_list.last_updated.is_some());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let state = issued(AppState::new("react"), REACT);
        let state = issued(state, RUST);
        let before = state.stories.clone();

        // The response for the superseded query arrives late
        let state = reduce(state, &success(REACT, vec![Story::new("1", "React")], 0));
        assert_eq!(state.stories, before);

        let state = reduce(
            state,
            &stories(StoriesAction::FetchFailure {
                url: REACT.to_string(),
            }),
        );
        assert_eq!(state.stories, before);
        assert!(state.story_list.last_updated.is_none());
    }

    #[test]
    fn test_lifecycle_without_any_issued_url_is_dropped() {
        let state = reduce(
            AppState::default(),
            &stories(StoriesAction::FetchInit {
                url: REACT.to_string(),
            }),
        );
        assert!(!state.stories.is_loading);
    }

    #[test]
    fn test_remove_is_never_stale() {
        let mut state = AppState::default();
        state.stories.data = vec![Story::new("1", "a"), Story::new("2", "b")];

        let state = reduce(state, &stories(StoriesAction::Remove(Story::new("1", "a"))));
        assert_eq!(state.stories.data, vec![Story::new("2", "b")]);
    }

    #[test]
    fn test_remove_last_row_moves_cursor_up() {
        let mut state = AppState::default();
        state.stories.data = vec![Story::new("1", "a"), Story::new("2", "b")];
        state.story_list.selected = 1;

        let state = reduce(state, &stories(StoriesAction::Remove(Story::new("2", "b"))));
        assert_eq!(state.story_list.selected, 0);
    }

    #[test]
    fn test_new_search_resets_cursor() {
        let mut state = issued(AppState::default(), REACT);
        state.stories.data = vec![Story::new("1", "a"), Story::new("2", "b")];
        state.story_list.selected = 1;

        let state = reduce(
            state,
            &success(REACT, vec![Story::new("3", "c"), Story::new("4", "d")], 0),
        );
        assert_eq!(state.story_list.selected, 0);
    }

    #[test]
    fn test_sort_toggle() {
        let state = reduce(
            AppState::default(),
            &Action::Sort(SortAction::Toggle(SortKey::Point)),
        );
        assert_eq!(state.sort.key, SortKey::Point);
        assert!(!state.sort.is_reverse);

        let state = reduce(state, &Action::Sort(SortAction::Toggle(SortKey::Point)));
        assert!(state.sort.is_reverse);
    }

    #[test]
    fn test_push_view_toggles() {
        let push = Action::Global(GlobalAction::PushView(Box::new(HelpView::new())));

        let state = reduce(AppState::default(), &push);
        assert_eq!(view_ids(&state), vec![ViewId::Stories, ViewId::Help]);

        let state = reduce(state, &push);
        assert_eq!(view_ids(&state), vec![ViewId::Stories]);
    }

    #[test]
    fn test_close_pops_then_quits() {
        let state = reduce(
            AppState::default(),
            &Action::Global(GlobalAction::PushView(Box::new(HelpView::new()))),
        );

        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert_eq!(view_ids(&state), vec![ViewId::Stories]);
        assert!(state.running);

        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert!(!state.running);
    }

    #[test]
    fn test_submit_closes_search_input() {
        let state = reduce(
            AppState::new("react"),
            &Action::Global(GlobalAction::PushView(Box::new(SearchInputView::new()))),
        );
        assert_eq!(view_ids(&state), vec![ViewId::Stories, ViewId::SearchInput]);

        let state = reduce(state, &Action::Search(SearchAction::Submit));
        assert_eq!(view_ids(&state), vec![ViewId::Stories]);
    }
}
