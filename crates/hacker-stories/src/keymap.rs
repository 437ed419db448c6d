pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};
use crate::domain_models::SortKey;

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("g", "g", NavigateToTop),
        KeyBinding::new("home", "Home", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        KeyBinding::new("end", "End", NavigateToBottom),
        // Search
        KeyBinding::new("/", "/", SearchEdit),
        KeyBinding::new("s", "s", SearchEdit),
        KeyBinding::new("m", "m", SearchLoadMore),
        KeyBinding::new("1", "1", SearchHistory(0)),
        KeyBinding::new("2", "2", SearchHistory(1)),
        KeyBinding::new("3", "3", SearchHistory(2)),
        KeyBinding::new("4", "4", SearchHistory(3)),
        KeyBinding::new("5", "5", SearchHistory(4)),
        // Stories
        KeyBinding::new("enter", "Enter", StoryOpen),
        KeyBinding::new("x", "x", StoryRemove),
        KeyBinding::new("delete", "Del", StoryRemove),
        // Sorting
        KeyBinding::new("t", "t", Sort(SortKey::Title)),
        KeyBinding::new("a", "a", Sort(SortKey::Author)),
        KeyBinding::new("c", "c", Sort(SortKey::Comment)),
        KeyBinding::new("p", "p", Sort(SortKey::Point)),
        KeyBinding::new("n", "n", Sort(SortKey::None)),
        // General
        KeyBinding::new("?", "?", HelpToggle),
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
