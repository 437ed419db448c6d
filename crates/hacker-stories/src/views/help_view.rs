//! Help panel view
//!
//! Displays all keybindings grouped by category.

use crate::actions::Action;
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::HelpPanelViewModel;
use crate::views::{popup_area, View, ViewId};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Left padding for content
const LEFT_PADDING: &str = "  ";

#[derive(Debug, Clone)]
pub struct HelpView;

impl HelpView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelpView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for HelpView {
    fn view_id(&self) -> ViewId {
        ViewId::Help
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let vm = HelpPanelViewModel::from_state(state);
        let lines = build_content_lines(&vm, theme);

        // Two rows for the border
        let height = (lines.len() as u16 + 2).min(area.height);
        let panel = popup_area(area, 60, height, area.height.saturating_sub(height) / 2);

        f.render_widget(Clear, panel);

        let footer = Line::from(vec![
            Span::styled(format!(" {}", vm.close_hint), theme.key_hint()),
            Span::styled(" close ", theme.muted()),
        ]);

        let block = Block::default()
            .title(vm.title.clone())
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title_style(theme.panel_title())
            .title_alignment(Alignment::Center)
            .title_bottom(footer);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(theme.panel_background());

        f.render_widget(paragraph, panel);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(action, Action::Global(_))
    }
}

fn build_content_lines<'a>(vm: &HelpPanelViewModel, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    for section in &vm.sections {
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(section.category, theme.section_header()),
        ]));

        for binding in &section.bindings {
            lines.push(Line::from(vec![
                Span::raw(LEFT_PADDING),
                Span::styled(format!("{:<12}", binding.keys), theme.key_hint()),
                Span::styled(binding.description.clone(), theme.key_description()),
            ]));
        }

        lines.push(Line::default());
    }

    // No blank line after the last section
    lines.pop();
    lines
}
