//! View Translation Middleware
//!
//! Translates the generic Navigate, TextInput and ViewContext actions into
//! view-specific actions using the active view's `translate_*` methods.
//! Translated actions are dispatched so they go through the full middleware
//! chain.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates generic actions via the active view
#[derive(Debug, Default)]
pub struct TranslationMiddleware;

impl TranslationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for TranslationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Some(view) = state.view_stack.last() else {
            return true;
        };

        let translated = match action {
            Action::Navigate(nav) => view.translate_navigation(*nav),
            Action::TextInput(input) => view.translate_text_input(input.clone()),
            Action::ViewContext(context) => view.translate_context_action(*context, state),
            _ => return true,
        };

        match translated {
            Some(translated) => {
                log::debug!(
                    "TranslationMiddleware: {:?} -> {:?} ({:?})",
                    action,
                    translated,
                    view.view_id()
                );
                dispatcher.dispatch(translated);
            }
            None => {
                log::debug!("{:?} not handled by {:?}", action, view.view_id());
            }
        }

        // Generic actions never reach the reducer
        false
    }
}
