//! Help Panel View Model
//!
//! Groups the keymap into sections for the help popup.

use crate::command_id::CommandId;
use crate::keybindings::Keymap;
use crate::state::AppState;

/// A single binding row in the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRow {
    /// Key hint (e.g., "j/↓", "Ctrl+C")
    pub keys: String,
    pub description: String,
}

/// A section grouping related bindings
#[derive(Debug, Clone)]
pub struct BindingSection {
    pub category: &'static str,
    pub bindings: Vec<BindingRow>,
}

/// View model for the help panel
#[derive(Debug, Clone)]
pub struct HelpPanelViewModel {
    pub title: String,
    pub sections: Vec<BindingSection>,
    /// Close hint (e.g., "?/q/Esc")
    pub close_hint: String,
}

impl HelpPanelViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let keymap = &state.keymap;

        let close_hint = [CommandId::HelpToggle, CommandId::GlobalClose]
            .iter()
            .filter_map(|c| keymap.compact_hint_for_command(*c))
            .collect::<Vec<_>>()
            .join("/");

        Self {
            title: " Key Bindings ".to_string(),
            sections: Self::build_sections(keymap),
            close_hint,
        }
    }

    /// Sections in keymap order, one row per command
    fn build_sections(keymap: &Keymap) -> Vec<BindingSection> {
        let mut sections: Vec<BindingSection> = Vec::new();
        let mut seen: Vec<CommandId> = Vec::new();

        for binding in keymap.bindings() {
            if seen.contains(&binding.command) {
                continue;
            }
            seen.push(binding.command);

            let row = BindingRow {
                keys: keymap
                    .compact_hint_for_command(binding.command)
                    .unwrap_or_else(|| binding.hint.clone()),
                description: binding.command.description(),
            };

            let category = binding.command.category();
            match sections.iter_mut().find(|s| s.category == category) {
                Some(section) => section.bindings.push(row),
                None => sections.push(BindingSection {
                    category,
                    bindings: vec![row],
                }),
            }
        }

        sections
    }
}
