//! Keybinding system
//!
//! This module provides the keybinding infrastructure that maps keyboard input
//! to commands.
//!
//! - `KeyBinding`: A mapping from a key pattern to a command ID
//! - `ParsedKeyPattern`: Matchable form of a textual key pattern (e.g. "ctrl+c", "G")
//! - `Keymap`: Collection of bindings with matching logic

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+c", "delete", "G"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+C", "Del"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    /// Create a new keybinding
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl ParsedKeyPattern {
    /// Whether `key` triggers this pattern
    ///
    /// Shift is ignored for character keys: terminals report it for
    /// symbols such as `?` and the character itself already carries the case.
    fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                key.modifiers.difference(KeyModifiers::SHIFT)
                    == self.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => key.modifiers == self.modifiers,
        }
    }
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "1", "G", "/" (case-sensitive)
/// - With modifiers: "ctrl+c", "shift+tab"
/// - Special keys: "enter", "esc", "backspace", "delete", "up", "down", ...
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    // Single characters keep their case ("G" vs "g")
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        return Some(ParsedKeyPattern {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;

    Some(ParsedKeyPattern { code, modifiers })
}

/// Parse a key code string into a KeyCode
fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a new keymap from a list of bindings
    ///
    /// Bindings with an unparsable key pattern are logged and skipped.
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern '{}'", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// All commands bound to `key`, in binding order
    pub fn match_key(&self, key: &KeyEvent) -> Vec<CommandId> {
        self.bindings
            .iter()
            .filter(|(_, pattern)| pattern.matches(key))
            .map(|(binding, _)| binding.command)
            .collect()
    }

    /// Get all bindings (for displaying in help)
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Find the hint for a specific command (returns first match)
    pub fn hint_for_command(&self, command: CommandId) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(b, _)| b.command == command)
            .map(|(b, _)| b.hint.as_str())
    }

    /// Get a compact hint string for a command (e.g., "j/↓" for NavigateNext)
    /// Deduplicates hints and joins with "/"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique_hints: Vec<&str> = Vec::new();
        for (binding, _) in &self.bindings {
            if binding.command == command && !unique_hints.contains(&binding.hint.as_str()) {
                unique_hints.push(&binding.hint);
            }
        }

        if unique_hints.is_empty() {
            None
        } else {
            Some(unique_hints.join("/"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keymap() -> Keymap {
        use CommandId::*;
        Keymap::new(vec![
            KeyBinding::new("j", "j", NavigateNext),
            KeyBinding::new("down", "↓", NavigateNext),
            KeyBinding::new("G", "G", NavigateToBottom),
            KeyBinding::new("?", "?", HelpToggle),
            KeyBinding::new("q", "q", GlobalClose),
            KeyBinding::new("esc", "Esc", GlobalClose),
            KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
            KeyBinding::new("ctrl+nonsense", "?", GlobalQuit),
        ])
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_key_pattern() {
        assert_eq!(
            parse_key_pattern("ctrl+c"),
            Some(ParsedKeyPattern {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL
            })
        );
        assert_eq!(
            parse_key_pattern("delete").map(|p| p.code),
            Some(KeyCode::Delete)
        );
        assert_eq!(parse_key_pattern("G").map(|p| p.code), Some(KeyCode::Char('G')));
        assert_eq!(parse_key_pattern("hyper+x"), None);
    }

    #[test]
    fn test_match_plain_and_special_keys() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('j'), KeyModifiers::NONE)),
            vec![CommandId::NavigateNext]
        );
        assert_eq!(
            keymap.match_key(&key(KeyCode::Down, KeyModifiers::NONE)),
            vec![CommandId::NavigateNext]
        );
        assert_eq!(
            keymap.match_key(&key(KeyCode::Esc, KeyModifiers::NONE)),
            vec![CommandId::GlobalClose]
        );
    }

    #[test]
    fn test_match_ignores_shift_on_chars() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            vec![CommandId::NavigateToBottom]
        );
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            vec![CommandId::HelpToggle]
        );
    }

    #[test]
    fn test_match_respects_control() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            vec![CommandId::GlobalQuit]
        );
        assert!(keymap
            .match_key(&key(KeyCode::Char('j'), KeyModifiers::CONTROL))
            .is_empty());
    }

    #[test]
    fn test_invalid_patterns_are_skipped() {
        assert_eq!(test_keymap().bindings().count(), 7);
    }

    #[test]
    fn test_hint_for_command_returns_first_match() {
        let keymap = test_keymap();
        assert_eq!(keymap.hint_for_command(CommandId::GlobalClose), Some("q"));
        assert_eq!(keymap.hint_for_command(CommandId::StoryRemove), None);
    }

    #[test]
    fn test_compact_hint() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::NavigateNext),
            Some("j/↓".to_string())
        );
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::GlobalClose),
            Some("q/Esc".to_string())
        );
        assert_eq!(keymap.compact_hint_for_command(CommandId::StoryOpen), None);
    }
}
