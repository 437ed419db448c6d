//! Search input popup
//!
//! Floating single-line input for the search term. Typing edits the term
//! live, Enter submits it, Esc closes the popup.

use crate::actions::{Action, GlobalAction, SearchAction, TermEdit, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{popup_area, View, ViewId};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct SearchInputView;

impl SearchInputView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SearchInputView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for SearchInputView {
    fn view_id(&self) -> ViewId {
        ViewId::SearchInput
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let panel = popup_area(area, 60, 3, 2);

        f.render_widget(Clear, panel);

        let footer = Line::from(vec![
            Span::styled(" Enter", theme.key_hint()),
            Span::styled(" search  ", theme.muted()),
            Span::styled("Esc", theme.key_hint()),
            Span::styled(" close ", theme.muted()),
        ])
        .right_aligned();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.panel_border())
            .title(" Search ")
            .title_style(theme.panel_title())
            .title_bottom(footer)
            .style(theme.panel_background());

        let inner = block.inner(panel);
        let term = state.search.term.as_str();
        f.render_widget(
            Paragraph::new(Span::styled(term, theme.text())).block(block),
            panel,
        );

        let cursor_x = inner.x + (term.chars().count() as u16).min(inner.width.saturating_sub(1));
        f.set_cursor_position(Position::new(cursor_x, inner.y));
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => Action::Search(SearchAction::Edit(TermEdit::Char(c))),
            TextInputAction::Backspace => Action::Search(SearchAction::Edit(TermEdit::Backspace)),
            TextInputAction::ClearLine => Action::Search(SearchAction::Edit(TermEdit::Clear)),
            TextInputAction::Escape => Action::Global(GlobalAction::Close),
            TextInputAction::Confirm => Action::Search(SearchAction::Submit),
        };
        Some(action)
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Search(_) | Action::TextInput(_) | Action::Global(_)
        )
    }
}
