//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `icon message [timestamp]                 key hint  key hint`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 {
            return;
        }

        buf.set_style(area, Style::default().bg(vm.bg_color));

        // Hints are right-aligned and take precedence over the message
        let hints: Vec<(String, String)> = vm
            .hints
            .iter()
            .map(|(keys, label)| (keys.clone(), format!(" {}  ", label)))
            .collect();
        let hints_width: u16 = hints
            .iter()
            .map(|(k, l)| (k.chars().count() + l.chars().count()) as u16)
            .sum();

        let mut x = area.right().saturating_sub(hints_width).max(area.x);
        for (keys, label) in &hints {
            let (next, _) = buf.set_stringn(
                x,
                area.y,
                keys,
                area.right().saturating_sub(x) as usize,
                vm.hint_key_style,
            );
            let (next, _) = buf.set_stringn(
                next,
                area.y,
                label,
                area.right().saturating_sub(next) as usize,
                vm.hint_label_style,
            );
            x = next;
        }

        let mut message = format!(" {} {}", vm.emoji, vm.message);
        if !vm.timestamp.is_empty() {
            message.push_str(&format!(" [{}]", vm.timestamp));
        }
        let message_width = area.width.saturating_sub(hints_width + 1) as usize;
        buf.set_stringn(area.x, area.y, &message, message_width, vm.message_style);
    }
}
