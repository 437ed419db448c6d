//! Stories State

use crate::domain_models::Story;

/// Fetched stories plus the fetch lifecycle flags
///
/// `data` accumulates across pages in arrival order; `page` is the page
/// of the last successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoriesState {
    pub data: Vec<Story>,
    pub page: u32,
    pub is_loading: bool,
    pub is_error: bool,
}
