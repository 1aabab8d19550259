//! Controlled checkbox
//!
//! The owner keeps the checked value. The widget only draws it, and
//! [`toggle_request`] tells the owner what to store after a click.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::tokens::Theme;

pub struct Checkbox<'a> {
    label: &'a str,
    checked: bool,
    disabled: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str, checked: bool, theme: &'a Theme) -> Self {
        Self {
            label,
            checked,
            disabled: false,
            focused: false,
            theme,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Columns needed to draw the box and its label
    pub fn width(&self) -> u16 {
        (4 + self.label.width()).min(u16::MAX as usize) as u16
    }
}

impl Widget for Checkbox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mark = if self.checked { "[x]" } else { "[ ]" };

        let mut box_style = Style::default().fg(self.theme.primary);
        let mut label_style = Style::default().fg(self.theme.text);
        if self.disabled {
            box_style = Style::default().fg(self.theme.muted);
            label_style = Style::default()
                .fg(self.theme.muted)
                .add_modifier(Modifier::DIM);
        }
        if self.focused {
            label_style = label_style.add_modifier(Modifier::UNDERLINED);
        }

        Line::from(vec![
            Span::styled(mark, box_style),
            Span::raw(" "),
            Span::styled(self.label, label_style),
        ])
        .render(area, buf);
    }
}

/// New value the owner should store for a click, or `None` when disabled
pub fn toggle_request(checked: bool, disabled: bool) -> Option<bool> {
    if disabled { None } else { Some(!checked) }
}

#[cfg(test)]
#[path = "checkbox_tests.rs"]
mod checkbox_tests;
