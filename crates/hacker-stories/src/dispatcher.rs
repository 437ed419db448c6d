//! Re-entrant dispatch for middleware
//!
//! Actions sent through a [`Dispatcher`] go back to the background worker
//! and run through the whole middleware chain again. The search middleware
//! uses it to issue `UrlIssued`, the fetch middleware to report results
//! from its tokio tasks.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Handle for feeding actions back into the middleware chain
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// `action_tx` must feed the background worker's receiver
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue `action` behind everything already waiting for the worker
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::warn!("Worker gone, dropping action: {:?}", e.0);
        }
    }
}
