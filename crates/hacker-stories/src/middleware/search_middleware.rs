//! Search Middleware
//!
//! Turns search commands into query URLs. `Submit`, `LoadMore` and
//! `SelectHistory` each issue a new target URL via `SearchAction::UrlIssued`;
//! the fetch middleware picks that up.
//!
//! The term and the paging position are tracked from the actions seen here,
//! not read from the state snapshot, which can lag behind the last
//! keystrokes or the last fetch result.
//!
//! `LoadMore` continues after the last page that actually arrived for the
//! current query. While a request for the current query is still running
//! it is ignored, so a page can neither be skipped nor requested twice.

use crate::actions::{Action, SearchAction, StoriesAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use hn_client::search_url::extract_search_term;
use hn_client::SearchUrlBuilder;

pub struct SearchMiddleware {
    urls: SearchUrlBuilder,
    /// Search term as of the last action seen
    term: String,
    /// Last URL this middleware issued
    current_url: Option<String>,
    /// Last page that loaded successfully for the current term
    loaded_page: Option<u32>,
    /// A request for `current_url` has no outcome yet
    in_flight: bool,
}

impl SearchMiddleware {
    pub fn new(urls: SearchUrlBuilder, initial_term: impl Into<String>) -> Self {
        Self {
            urls,
            term: initial_term.into(),
            current_url: None,
            loaded_page: None,
            in_flight: false,
        }
    }

    /// Start over at page 0 of `term`
    fn search(&mut self, term: &str, dispatcher: &Dispatcher) {
        self.loaded_page = None;
        let url = self.urls.build_url(term, 0);
        self.issue(url, dispatcher);
    }

    fn issue(&mut self, url: String, dispatcher: &Dispatcher) {
        log::info!("Issuing query {}", url);
        self.current_url = Some(url.clone());
        self.in_flight = true;
        dispatcher.dispatch(Action::Search(SearchAction::UrlIssued(url)));
    }

    fn load_more(&mut self, dispatcher: &Dispatcher) {
        let Some(current) = self.current_url.as_deref() else {
            log::debug!("Nothing searched yet, nothing to load more of");
            return;
        };
        if self.in_flight {
            log::debug!("Still loading {}, ignoring load more", current);
            return;
        }

        let term = extract_search_term(current);
        let page = self.loaded_page.map_or(0, |page| page + 1);
        let url = self.urls.build_url(&term, page);
        self.issue(url, dispatcher);
    }

    /// Follow the outcome of the request for the current URL
    fn track_outcome(&mut self, action: &StoriesAction) {
        let Some(url) = action.url() else {
            return;
        };
        if self.current_url.as_deref() != Some(url) {
            return;
        }

        match action {
            StoriesAction::FetchSuccess { payload, .. } => {
                self.loaded_page = Some(payload.page);
                self.in_flight = false;
            }
            StoriesAction::FetchFailure { .. } => {
                self.in_flight = false;
            }
            StoriesAction::FetchInit { .. } | StoriesAction::Remove(_) => {}
        }
    }
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let search = match action {
            Action::Search(search) => search,
            Action::Stories(stories) => {
                self.track_outcome(stories);
                return true;
            }
            _ => return true,
        };

        match search {
            SearchAction::Edit(edit) => {
                self.term = edit.apply(&self.term);
            }
            SearchAction::Submit => {
                if self.term.is_empty() {
                    log::debug!("Ignoring submit of an empty search term");
                    return false;
                }
                let term = self.term.clone();
                self.search(&term, dispatcher);
            }
            SearchAction::LoadMore => {
                self.load_more(dispatcher);
                return false;
            }
            SearchAction::PickHistory(index) => {
                match state.search.last_searches().into_iter().nth(*index) {
                    Some(term) => {
                        dispatcher.dispatch(Action::Search(SearchAction::SelectHistory(term)))
                    }
                    None => log::debug!("No search history entry {}", index),
                }
                return false;
            }
            SearchAction::SelectHistory(term) => {
                self.term = term.clone();
                self.search(term, dispatcher);
            }
            SearchAction::UrlIssued(_) => {}
        }

        true
    }
}
