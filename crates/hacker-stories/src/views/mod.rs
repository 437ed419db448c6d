use crate::actions::{Action, ContextAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    Frame,
};

pub mod help_view;
pub mod search_input_view;
pub mod status_bar;
pub mod stories_view;

pub use help_view::HelpView;
pub use search_input_view::SearchInputView;
pub use stories_view::StoriesView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Stories,
    SearchInput,
    Help,
}

/// View trait - defines the interface that all views must implement
///
/// This allows the application to interact with views polymorphically through
/// trait objects (Box<dyn View>).
///
/// The trait must stay object-safe, and views travel inside actions and the
/// shared state, so they must be `Send + Sync`.
pub trait View: std::fmt::Debug + Send + Sync {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    /// This is needed because Clone requires Sized, so we provide a manual clone method
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific action.
    ///
    /// The default implementation returns None, indicating the view doesn't
    /// handle navigation.
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific action.
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Translate a context action (Enter, remove) for the focused item.
    ///
    /// Gets the state because the result depends on what is focused.
    fn translate_context_action(&self, _action: ContextAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Whether a keymap command producing `action` may fire while this view is on top
    fn accepts_action(&self, action: &Action) -> bool;
}

/// Implement Clone for Box<dyn View>
impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views are rendered bottom-up so floating views end up on top.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}

/// Area of a floating panel: horizontally centered, `percent_x` wide
/// and `height` rows high, placed `top` rows below the top of `area`
pub fn popup_area(area: Rect, percent_x: u16, height: u16, top: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [_, row] = Layout::vertical([Constraint::Length(top), Constraint::Length(height)])
        .flex(Flex::Start)
        .areas(column);
    row
}
