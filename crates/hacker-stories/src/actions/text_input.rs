//! Text input actions - shared across views with text input capability

/// Generic text input actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into input field
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear entire line (Ctrl+U)
    ClearLine,
    /// Escape pressed - typically closes the input
    Escape,
    /// Enter pressed - confirm/execute
    Confirm,
}
