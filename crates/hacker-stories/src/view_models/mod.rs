pub mod help_view_model;
pub mod search_bar_view_model;
pub mod status_bar;
pub mod story_table_view_model;

pub use help_view_model::HelpPanelViewModel;
pub use search_bar_view_model::SearchBarViewModel;
pub use status_bar::StatusBarViewModel;
pub use story_table_view_model::{StoryTableContent, StoryTableViewModel};
