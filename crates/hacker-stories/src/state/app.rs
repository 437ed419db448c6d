//! Application State

use crate::domain_models::{sort_stories, SortSelection, Story};
use crate::keymap::{default_keymap, Keymap};
use crate::theme::Theme;
use crate::views::{StoriesView, View};

use super::{SearchState, StoriesState, StoryListState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    pub search: SearchState,
    pub stories: StoriesState,
    pub sort: SortSelection,
    pub story_list: StoryListState,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
}

impl AppState {
    /// Initial state with the given search term in the input
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search: SearchState::new(search_term),
            ..Self::default()
        }
    }

    /// Stories in display order
    pub fn visible_stories(&self) -> Vec<&Story> {
        sort_stories(&self.stories.data, &self.sort)
    }

    /// The story under the cursor
    pub fn selected_story(&self) -> Option<&Story> {
        self.visible_stories()
            .get(self.story_list.selected)
            .copied()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(StoriesView::new())],
            search: SearchState::default(),
            stories: StoriesState::default(),
            sort: SortSelection::default(),
            story_list: StoryListState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
        }
    }
}
