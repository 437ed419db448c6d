//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! This middleware uses a three-layer approach to handle keyboard input:
//!
//! ## Layer 1: Priority Keys
//! Keys that always work regardless of context (Ctrl+C, Esc).
//!
//! ## Layer 2: Capabilities
//! Views with TEXT_INPUT capability receive character keys as text input
//! rather than keybindings.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, then check if the active view accepts the action.
//! This prevents actions from "leaking" to reducers when a different view is active.

use crate::actions::{Action, GlobalAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input using a three-layer approach
#[derive(Debug, Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Handle a key event using the three-layer approach
    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let view = state.view_stack.last();
        let capabilities = view
            .map(|v| v.capabilities(state))
            .unwrap_or(PanelCapabilities::empty());

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        // Esc lets a text input decide between cancel and close
        if key.code == KeyCode::Esc {
            if capabilities.accepts_text_input() {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            if let Some(input) = text_input_for(&key) {
                log::debug!("Layer 2: TEXT_INPUT - routing {:?}", input);
                dispatcher.dispatch(Action::TextInput(input));
                return;
            }
            // Other keys fall through to the keymap (gated below)
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        for command in state.keymap.match_key(&key) {
            if is_navigation(command) && !navigation_allowed(capabilities, &key) {
                log::debug!("Layer 3: {:?} needs navigation capability, skipping", command);
                continue;
            }

            let action = command.to_action();
            match view {
                Some(view) if !view.accepts_action(&action) => {
                    log::debug!(
                        "Layer 3: Command {:?} rejected by view {:?}, trying next",
                        command,
                        view.view_id()
                    );
                }
                _ => {
                    log::debug!("Layer 3: Command {:?} dispatched", command);
                    dispatcher.dispatch(action);
                    return;
                }
            }
        }

        // Unhandled keys are consumed (not passed through)
    }
}

/// Text input action for a key, if it is one
fn text_input_for(key: &KeyEvent) -> Option<TextInputAction> {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        // Ctrl+U - Unix line kill
        KeyCode::Char('u') if control => Some(TextInputAction::ClearLine),
        KeyCode::Char(c) if !control && !alt => Some(TextInputAction::Char(c)),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            Some(TextInputAction::ClearLine)
        }
        KeyCode::Backspace => Some(TextInputAction::Backspace),
        KeyCode::Enter => Some(TextInputAction::Confirm),
        _ => None,
    }
}

fn is_navigation(command: CommandId) -> bool {
    matches!(
        command,
        CommandId::NavigateNext
            | CommandId::NavigatePrevious
            | CommandId::NavigateToTop
            | CommandId::NavigateToBottom
    )
}

/// Navigation needs ITEM_NAVIGATION; letter keys additionally need vim bindings
fn navigation_allowed(capabilities: PanelCapabilities, key: &KeyEvent) -> bool {
    if !capabilities.supports_item_navigation() {
        return false;
    }
    !matches!(key.code, KeyCode::Char(_)) || capabilities.supports_vim_navigation()
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept Global KeyPressed actions
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            self.handle_key(*key, state, dispatcher);
            return false;
        }

        // All other actions pass through
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ContextAction, NavigationAction, SearchAction, SortAction};
    use crate::domain_models::SortKey;
    use crate::views::{HelpView, SearchInputView};
    use std::sync::mpsc::{self, Receiver};

    fn press(state: &AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let consumed = !KeyboardMiddleware::new().handle(
            &Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, modifiers))),
            state,
            &dispatcher,
        );
        assert!(consumed);
        drain(rx)
    }

    fn drain(rx: Receiver<Action>) -> Vec<Action> {
        rx.try_iter().collect()
    }

    fn with_view(view: Box<dyn crate::views::View>) -> AppState {
        let mut state = AppState::default();
        state.view_stack.push(view);
        state
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let state = with_view(Box::new(SearchInputView::new()));
        let actions = press(&state, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Quit)]
        ));
    }

    #[test]
    fn test_story_list_keys() {
        let state = AppState::default();

        let actions = press(&state, KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Navigate(NavigationAction::Next)]
        ));

        let actions = press(&state, KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::ViewContext(ContextAction::Remove)]
        ));

        let actions = press(&state, KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Sort(SortAction::Toggle(SortKey::Comment))]
        ));

        let actions = press(&state, KeyCode::Char('3'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Search(SearchAction::PickHistory(2))]
        ));
    }

    #[test]
    fn test_text_input_captures_characters() {
        let state = with_view(Box::new(SearchInputView::new()));

        let actions = press(&state, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Char('q'))]
        ));

        let actions = press(&state, KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Confirm)]
        ));

        let actions = press(&state, KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Escape)]
        ));
    }

    #[test]
    fn test_text_input_blocks_navigation() {
        let state = with_view(Box::new(SearchInputView::new()));
        let actions = press(&state, KeyCode::Down, KeyModifiers::NONE);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_help_view_gates_list_commands() {
        let state = with_view(Box::new(HelpView::new()));

        assert!(press(&state, KeyCode::Char('t'), KeyModifiers::NONE).is_empty());
        assert!(press(&state, KeyCode::Char('j'), KeyModifiers::NONE).is_empty());

        let actions = press(&state, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Close)]
        ));
    }
}
