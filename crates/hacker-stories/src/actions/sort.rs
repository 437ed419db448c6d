//! Sort actions

use crate::domain_models::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAction {
    /// Sort by `key`, or flip the direction if `key` is already active
    Toggle(SortKey),
}
