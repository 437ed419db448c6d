//! Panel capability system
//!
//! Views declare capabilities that drive keyboard routing: a view with
//! `TEXT_INPUT` receives typed characters, a view with
//! `VIM_NAVIGATION_BINDINGS` receives j/k/g/G as list navigation.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// View supports vim-style navigation keybindings (j, k, g, G)
        const VIM_NAVIGATION_BINDINGS = 1 << 0;

        /// View can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 1;

        /// View accepts free text input
        const TEXT_INPUT = 1 << 2;
    }
}

impl PanelCapabilities {
    /// Check if view supports vim-style navigation (j/k/g/G)
    pub fn supports_vim_navigation(self) -> bool {
        self.contains(Self::VIM_NAVIGATION_BINDINGS)
    }

    /// Check if view supports item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    /// Check if view routes characters to text input
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_are_independent() {
        let list = PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::VIM_NAVIGATION_BINDINGS;
        assert!(list.supports_vim_navigation());
        assert!(list.supports_item_navigation());
        assert!(!list.accepts_text_input());

        let input = PanelCapabilities::TEXT_INPUT;
        assert!(input.accepts_text_input());
        assert!(!input.supports_vim_navigation());
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(PanelCapabilities::default(), PanelCapabilities::empty());
    }
}
