//! Search URL builder
//!
//! Builds query URLs of the form
//! `{base}/search?query={term}&page={page}` and recovers the term and
//! page from them again. The term is percent-encoded, so any term
//! (including one containing `&`, `=` or `?`) survives the round trip.

use crate::DEFAULT_API_BASE;

const SEARCH_ENDPOINT: &str = "/search";
const PARAM_SEARCH: &str = "query=";
const PARAM_PAGE: &str = "page=";

/// Builds and parses search query URLs for one API base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchUrlBuilder {
    api_base: String,
}

impl Default for SearchUrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl SearchUrlBuilder {
    /// Create a builder for the given API base (trailing slashes are dropped)
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// The API base this builder was created with
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build the query URL for a search term and page
    pub fn build_url(&self, term: &str, page: u32) -> String {
        format!(
            "{}{}?{}{}&{}{}",
            self.api_base,
            SEARCH_ENDPOINT,
            PARAM_SEARCH,
            urlencoding::encode(term),
            PARAM_PAGE,
            page
        )
    }

    /// Recover the search term from a URL produced by [`Self::build_url`]
    ///
    /// Only the query string is inspected, so URLs built against a
    /// different API base are understood as well. Returns an empty string
    /// when the URL has no `query=` parameter.
    pub fn extract_search_term(&self, url: &str) -> String {
        extract_search_term(url)
    }

    /// Recover the page number from a URL produced by [`Self::build_url`]
    pub fn extract_page(&self, url: &str) -> Option<u32> {
        extract_page(url)
    }
}

/// Recover the search term from a query URL
pub fn extract_search_term(url: &str) -> String {
    let Some(raw) = query_param(url, PARAM_SEARCH) else {
        return String::new();
    };

    match urlencoding::decode(raw) {
        Ok(term) => term.into_owned(),
        Err(e) => {
            log::warn!("Search term in {} is not valid UTF-8: {}", url, e);
            raw.to_string()
        }
    }
}

/// Recover the page number from a query URL
pub fn extract_page(url: &str) -> Option<u32> {
    query_param(url, PARAM_PAGE).and_then(|page| page.parse().ok())
}

/// Find the raw (still encoded) value of a query parameter
fn query_param<'a>(url: &'a str, prefix: &str) -> Option<&'a str> {
    let (_, query) = url.rsplit_once('?')?;
    query
        .split('&')
        .find_map(|param| param.strip_prefix(prefix))
}
