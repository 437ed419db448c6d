//! Stories Reducer
//!
//! State machine of the story list: fetch lifecycle flags, page
//! accumulation and removal.

use crate::actions::StoriesAction;
use crate::state::StoriesState;

/// Reduce the stories slice
///
/// Every lifecycle transition sets both `is_loading` and `is_error`.
/// Which URL an action belongs to is not checked here; the root reducer
/// drops stale lifecycle actions before they get this far.
pub fn reduce_stories(mut state: StoriesState, action: &StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit { url } => {
            log::debug!("Fetching stories from {}", url);
            state.is_loading = true;
            state.is_error = false;
        }

        StoriesAction::FetchSuccess { payload, .. } => {
            if payload.page == 0 {
                state.data = payload.list.clone();
            } else {
                state.data.extend(payload.list.iter().cloned());
            }
            state.page = payload.page;
            state.is_loading = false;
            state.is_error = false;
            log::info!(
                "Loaded page {} ({} stories, {} total)",
                payload.page,
                payload.list.len(),
                state.data.len()
            );
        }

        StoriesAction::FetchFailure { url } => {
            log::warn!("Fetching stories from {} failed", url);
            state.is_loading = false;
            state.is_error = true;
        }

        StoriesAction::Remove(story) => {
            state.data.retain(|s| s.object_id != story.object_id);
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{StoriesPage, Story};
    use pretty_assertions::assert_eq;

    const URL: &str = "https://hn.algolia.com/api/v1/search?query=react&page=0";

    fn story_a() -> Story {
        Story::new("0", "React")
            .with_url("https://reactjs.org/")
            .with_author("Jordan Walke")
            .with_counts(3, 4)
    }

    fn story_b() -> Story {
        Story::new("1", "Redux")
            .with_url("https://redux.js.org/")
            .with_author("Dan Abramov, Andrew Clark")
            .with_counts(2, 5)
    }

    fn success(list: Vec<Story>, page: u32) -> StoriesAction {
        StoriesAction::FetchSuccess {
            url: URL.to_string(),
            payload: StoriesPage { list, page },
        }
    }

    #[test]
    fn test_remove_story() {
        let state = StoriesState {
            data: vec![story_a(), story_b()],
            ..Default::default()
        };

        let new_state = reduce_stories(state, &StoriesAction::Remove(story_b()));

        assert_eq!(
            new_state,
            StoriesState {
                data: vec![story_a()],
                page: 0,
                is_loading: false,
                is_error: false,
            }
        );
    }

    #[test]
    fn test_remove_matches_by_id_only() {
        let state = StoriesState {
            data: vec![story_a(), story_b()],
            ..Default::default()
        };

        let same_id = Story::new("0", "a different title");
        let new_state = reduce_stories(state, &StoriesAction::Remove(same_id));
        assert_eq!(new_state.data, vec![story_b()]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let state = StoriesState {
            data: vec![story_a(), story_b()],
            page: 2,
            is_loading: true,
            is_error: false,
        };

        let new_state = reduce_stories(state.clone(), &StoriesAction::Remove(Story::new("9", "?")));
        assert_eq!(new_state, state);
    }

    #[test]
    fn test_fetch_init_sets_loading() {
        let state = StoriesState {
            data: vec![story_a()],
            page: 1,
            is_loading: false,
            is_error: true,
        };

        let new_state = reduce_stories(
            state,
            &StoriesAction::FetchInit {
                url: URL.to_string(),
            },
        );

        assert!(new_state.is_loading);
        assert!(!new_state.is_error);
        assert_eq!(new_state.data, vec![story_a()]);
        assert_eq!(new_state.page, 1);
    }

    #[test]
    fn test_fetch_init_then_failure() {
        let state = reduce_stories(
            StoriesState::default(),
            &StoriesAction::FetchInit {
                url: URL.to_string(),
            },
        );
        let state = reduce_stories(
            state,
            &StoriesAction::FetchFailure {
                url: URL.to_string(),
            },
        );

        assert_eq!(
            state,
            StoriesState {
                data: vec![],
                page: 0,
                is_loading: false,
                is_error: true,
            }
        );
    }

    #[test]
    fn test_first_page_replaces_data() {
        let state = StoriesState {
            data: vec![story_a()],
            page: 3,
            is_loading: true,
            is_error: false,
        };

        let new_state = reduce_stories(state, &success(vec![story_b()], 0));

        assert_eq!(
            new_state,
            StoriesState {
                data: vec![story_b()],
                page: 0,
                is_loading: false,
                is_error: false,
            }
        );
    }

    #[test]
    fn test_next_page_appends_data() {
        let state = StoriesState {
            data: vec![story_a()],
            page: 0,
            is_loading: true,
            is_error: false,
        };

        let new_state = reduce_stories(state, &success(vec![story_b()], 1));

        assert_eq!(new_state.data, vec![story_a(), story_b()]);
        assert_eq!(new_state.page, 1);
        assert!(!new_state.is_loading);
    }
}
