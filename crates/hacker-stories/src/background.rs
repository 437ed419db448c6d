//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering, user input and reducers
//! - Background thread runs the middleware chain (requests, preference writes)
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via Dispatcher re-enter the middleware chain.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher (re-entry)
/// - `action_tx`: used to create Dispatcher for middleware to dispatch actions that re-enter
/// - `result_tx`: sends actions to main thread for reducers (non-consumed actions)
/// - `state`: shared state for middleware to read
/// - `middleware`: the middleware chain
///
/// The worker stops after forwarding `Global(Quit)`.
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    while let Ok(action) = action_rx.recv() {
        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            if result_tx.send(action).is_err() {
                log::debug!("Main thread already gone, quit not forwarded");
            }
            break;
        }

        // Get current state snapshot for middleware
        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        if run_chain(&mut middleware, &action, &current_state, &dispatcher)
            && result_tx.send(action).is_err()
        {
            log::error!("Result channel disconnected, shutting down");
            break;
        }
    }

    log::info!("Background worker stopped");
}

/// Run `action` through the chain; `true` if no middleware consumed it
fn run_chain(
    middleware: &mut [Box<dyn Middleware>],
    action: &Action,
    state: &AppState,
    dispatcher: &Dispatcher,
) -> bool {
    for mw in middleware.iter_mut() {
        if !mw.handle(action, state, dispatcher) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{SearchAction, SortAction};
    use crate::domain_models::SortKey;
    use std::sync::mpsc;
    use std::time::Duration;

    /// Consumes every Submit and answers with a history selection
    struct SwallowSubmit;

    impl Middleware for SwallowSubmit {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            if matches!(action, Action::Search(SearchAction::Submit)) {
                dispatcher.dispatch(Action::Search(SearchAction::SelectHistory("swallowed".into())));
                return false;
            }
            true
        }
    }

    #[test]
    fn test_forwards_and_reenters() {
        let (action_tx, action_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let state = Arc::new(RwLock::new(AppState::default()));

        let handle = spawn_background_worker(
            action_rx,
            action_tx.clone(),
            result_tx,
            state,
            vec![Box::new(SwallowSubmit)],
        );

        action_tx
            .send(Action::Sort(SortAction::Toggle(SortKey::Title)))
            .unwrap();
        action_tx.send(Action::Search(SearchAction::Submit)).unwrap();

        let timeout = Duration::from_secs(2);
        let first = result_rx.recv_timeout(timeout).unwrap();
        assert!(matches!(
            first,
            Action::Sort(SortAction::Toggle(SortKey::Title))
        ));

        let second = result_rx.recv_timeout(timeout).unwrap();
        assert!(matches!(
            second,
            Action::Search(SearchAction::SelectHistory(ref term)) if term == "swallowed"
        ));

        action_tx.send(Action::Global(GlobalAction::Quit)).unwrap();
        let quit = result_rx.recv_timeout(timeout).unwrap();
        assert!(matches!(quit, Action::Global(GlobalAction::Quit)));
        handle.join().unwrap();
    }
}
