//! Stories view
//!
//! The base view: title bar, search bar with history, the story table and
//! the status bar.

use crate::actions::{Action, ContextAction, NavigationAction, StoriesAction, StoryListAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::{
    SearchBarViewModel, StatusBarViewModel, StoryTableContent, StoryTableViewModel,
};
use crate::views::status_bar::StatusBarWidget;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Main story list view
#[derive(Debug, Clone)]
pub struct StoriesView;

impl StoriesView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StoriesView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for StoriesView {
    fn view_id(&self) -> ViewId {
        ViewId::Stories
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::VIM_NAVIGATION_BINDINGS
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => StoryListAction::NavigateNext,
            NavigationAction::Previous => StoryListAction::NavigatePrevious,
            NavigationAction::ToTop => StoryListAction::NavigateToTop,
            NavigationAction::ToBottom => StoryListAction::NavigateToBottom,
        };
        Some(Action::StoryList(action))
    }

    fn translate_context_action(&self, action: ContextAction, state: &AppState) -> Option<Action> {
        let story = state.selected_story()?;
        let translated = match action {
            ContextAction::Confirm => Action::StoryList(StoryListAction::OpenInBrowser(story.link())),
            ContextAction::Remove => Action::Stories(StoriesAction::Remove(story.clone())),
        };
        Some(translated)
    }

    fn accepts_action(&self, action: &Action) -> bool {
        !matches!(action, Action::TextInput(_))
    }
}

/// Render the stories view
fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let [title_area, search_area, history_area, table_area, status_area] = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(3), // Search bar
        Constraint::Length(1), // Search history
        Constraint::Min(0),    // Story table
        Constraint::Length(1), // Status bar
    ])
    .areas(area);

    let theme = &state.theme;

    f.render_widget(
        Paragraph::new(" Hacker Stories").style(theme.title_bar()),
        title_area,
    );

    let search_vm = SearchBarViewModel::from_state(state);
    render_search_bar(&search_vm, theme, search_area, f);
    render_history(&search_vm, theme, history_area, f);

    let table_vm = StoryTableViewModel::from_state(state);
    render_table(&table_vm, theme, table_area, f);

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status_vm), status_area);
}

fn render_search_bar(vm: &SearchBarViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let submit_style = if vm.submit_enabled {
        theme.key_hint()
    } else {
        theme.muted()
    };

    let hint = Line::from(vec![
        Span::styled(format!(" {}", vm.edit_hint), theme.key_hint()),
        Span::styled(" edit  ", theme.muted()),
        Span::styled("Enter", submit_style),
        Span::styled(" submit ", theme.muted()),
    ])
    .right_aligned();

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.muted())
        .title_bottom(hint);

    let line = Line::from(vec![
        Span::styled(format!("{} ", vm.label), theme.panel_title()),
        Span::styled(vm.term.clone(), theme.text()),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_history(vm: &SearchBarViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut spans = vec![Span::styled(" Recent: ", theme.muted())];
    if vm.history.is_empty() {
        spans.push(Span::styled("none yet", theme.muted()));
    }
    for chip in &vm.history {
        spans.push(Span::styled(format!("[{}]", chip.key), theme.key_hint()));
        spans.push(Span::styled(format!(" {}  ", chip.term), theme.key_description()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(vm: &StoryTableViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::bordered()
        .border_type(BorderType::QuadrantOutside)
        .border_style(theme.panel_border())
        .title(vm.title.clone());

    let message = match vm.content {
        StoryTableContent::Loading => Some(Line::styled("Loading ...", theme.loading())),
        StoryTableContent::Error => {
            Some(Line::styled("Something went wrong ...", theme.error()))
        }
        StoryTableContent::Empty => Some(Line::styled("No stories", theme.muted())),
        StoryTableContent::Rows => None,
    };

    if let Some(message) = message {
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vm.header.iter().map(|cell| {
        let style = if cell.active {
            theme.table_header_active()
        } else {
            theme.table_header()
        };
        Cell::from(cell.label.clone()).style(style)
    }))
    .style(theme.table_header())
    .height(1);

    let rows = vm.rows.iter().enumerate().map(|(index, row)| {
        Row::new(vec![
            Cell::from(row.title.clone()),
            Cell::from(row.author.clone()),
            Cell::from(format!("{:>8}", row.comments)),
            Cell::from(format!("{:>6}", row.points)),
        ])
        .style(theme.table_row(index))
        .height(1)
    });

    let widths = [
        Constraint::Percentage(55),
        Constraint::Percentage(25),
        Constraint::Length(11),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.table_selected())
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(vm.selected_index));
    f.render_stateful_widget(table, area, &mut table_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Story;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn state_with_stories() -> AppState {
        let mut state = AppState::default();
        state.stories.data = vec![
            Story::new("1", "React").with_url("https://reactjs.org/"),
            Story::new("2", "Ask HN: Redux?"),
        ];
        state
    }

    #[test]
    fn test_confirm_opens_selected_story() {
        let mut state = state_with_stories();
        state.story_list.selected = 1;

        let action = StoriesView::new().translate_context_action(ContextAction::Confirm, &state);
        assert!(matches!(
            action,
            Some(Action::StoryList(StoryListAction::OpenInBrowser(ref url)))
                if url == "https://news.ycombinator.com/item?id=2"
        ));
    }

    #[test]
    fn test_remove_targets_selected_story() {
        let state = state_with_stories();

        let action = StoriesView::new().translate_context_action(ContextAction::Remove, &state);
        match action {
            Some(Action::Stories(StoriesAction::Remove(story))) => {
                assert_eq!(story.object_id, "1")
            }
            other => panic!("unexpected translation: {:?}", other),
        }
    }

    #[test]
    fn test_context_actions_need_a_story() {
        let state = AppState::default();
        assert!(StoriesView::new()
            .translate_context_action(ContextAction::Remove, &state)
            .is_none());
    }

    #[test]
    fn test_renders_titles() {
        let state = state_with_stories();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        terminal
            .draw(|f| StoriesView::new().render(&state, f.area(), f))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Hacker Stories"));
        assert!(content.contains("React"));
        assert!(content.contains("Ask HN: Redux?"));
    }
}
