//! Search history
//!
//! Derives the recently searched terms from the sequence of issued query
//! URLs.

use hn_client::search_url::extract_search_term;

/// Maximum number of terms in the search history
pub const LAST_SEARCHES_LIMIT: usize = 5;

/// Most recent distinct search terms, newest first
///
/// Scans `urls` from the newest entry backwards without touching the
/// slice, so the caller can keep using it in its original order.
pub fn last_searches(urls: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::with_capacity(LAST_SEARCHES_LIMIT);

    for url in urls.iter().rev() {
        if terms.len() == LAST_SEARCHES_LIMIT {
            break;
        }
        let term = extract_search_term(url);
        if !terms.contains(&term) {
            terms.push(term);
        }
    }

    terms
}
