//! Bootstrap actions

/// Actions for application startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Terminal is ready, run the initial search
    Start,
}
