use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod command_id;
mod dispatcher;
mod domain_models;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod theme;
mod utils;
mod view_models;
mod views;

use actions::{Action, BootstrapAction, GlobalAction};
use background::{spawn_background_worker, SharedState};
use hacker_stories_config::{AppConfig, FilePreferenceStore, SemiPersistentState, SEARCH_TERM_KEY};
use hn_client::{AlgoliaClient, SearchUrlBuilder, StoryClient};
use middleware::{
    bootstrap_middleware::BootstrapMiddleware, browser_middleware::BrowserMiddleware,
    fetch_middleware::FetchMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging::LoggingMiddleware, preference_middleware::PreferenceMiddleware,
    search_middleware::SearchMiddleware, translation_middleware::TranslationMiddleware,
    Middleware,
};
use state::AppState;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    let log_path = logger::init()?;
    log::info!("Starting hacker-stories (log file: {})", log_path.display());

    let config = AppConfig::load();
    let store = FilePreferenceStore::open_default().context("Failed to open preferences")?;
    let mut search_term =
        SemiPersistentState::load(store, SEARCH_TERM_KEY, &config.default_search_term);
    if let Err(e) = search_term.persist() {
        log::warn!("Failed to store initial search term: {:#}", e);
    }
    let initial_term = search_term.value().to_string();
    log::info!("Initial search term: '{}'", initial_term);

    let state: SharedState = Arc::new(RwLock::new(AppState::new(initial_term.clone())));

    let client: Arc<dyn StoryClient> = Arc::new(
        AlgoliaClient::with_timeout(config.request_timeout())
            .context("Failed to create search client")?,
    );

    // Middleware executes in this order
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(TranslationMiddleware::new()),
        Box::new(BootstrapMiddleware::new()),
        Box::new(SearchMiddleware::new(
            SearchUrlBuilder::new(config.api_base_url.as_str()),
            initial_term,
        )),
        Box::new(PreferenceMiddleware::new(search_term)),
        Box::new(FetchMiddleware::new(client).context("Failed to start async runtime")?),
        Box::new(BrowserMiddleware::new()),
    ];

    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let (result_tx, result_rx) = mpsc::channel::<Action>();
    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&state),
        middleware,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &state, &action_tx, &result_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // The worker may already be gone after a regular quit
    let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    if let Err(err) = &result {
        eprintln!("Error: {:#}", err);
    }

    log::info!("Exiting hacker-stories");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shared: &SharedState,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
) -> anyhow::Result<()> {
    let mut state = read_state(shared)?;

    action_tx
        .send(Action::Bootstrap(BootstrapAction::Start))
        .context("Background worker is not running")?;

    loop {
        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&state, area, frame);
        })?;

        // Check if we should quit
        if !state.running {
            break;
        }

        // Handle events
        if event::poll(EVENT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press
                    && action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .is_err()
                {
                    log::error!("Background worker is gone, stopping");
                    break;
                }
            }
        }

        // Apply everything the middleware chain let through
        let mut changed = false;
        while let Ok(action) = result_rx.try_recv() {
            state = reducers::app_reducer::reduce(state, &action);
            changed = true;
        }

        if changed {
            match shared.write() {
                Ok(mut guard) => *guard = state.clone(),
                Err(e) => anyhow::bail!("Failed to write shared state: {}", e),
            }
        }
    }

    Ok(())
}

fn read_state(shared: &SharedState) -> anyhow::Result<AppState> {
    shared
        .read()
        .map(|guard| guard.clone())
        .map_err(|e| anyhow::anyhow!("Failed to read shared state: {}", e))
}
