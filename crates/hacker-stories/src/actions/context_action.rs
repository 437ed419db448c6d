//! Context-sensitive actions
//!
//! These are semantic actions that views interpret differently based on context.
//! In the story table, `Confirm` opens the focused story and `Remove` drops it
//! from the list.

/// Semantic actions that views interpret differently.
///
/// Each view translates them to view-specific actions via `translate_context_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action on focused item (Enter key)
    Confirm,
    /// Remove the focused item (x, Delete)
    Remove,
}
