//! Tooltip rendering
//!
//! Triggers render in place during the normal pass; overlays are rendered in
//! a final pass so they sit above everything else on screen.

use ratatui::{
    Frame,
    layout::{Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::placement::overlay_rect;
use super::tooltip_state::TooltipState;
use crate::tokens::Theme;
use crate::widgets::popup::clear_area;

/// Widest line of tooltip text before wrapping
pub const MAX_CONTENT_WIDTH: u16 = 36;
/// Border plus one column of padding on each side
const HORIZONTAL_CHROME: u16 = 4;
const VERTICAL_CHROME: u16 = 2;

/// Render the wrapper and its children, recording the wrapper rect for hover detection
pub fn render_trigger<W: Widget>(frame: &mut Frame, area: Rect, state: &mut TooltipState, children: W) {
    state.set_trigger(area);
    frame.render_widget(children, area);
}

/// Render the overlay for a shown tooltip; nothing is drawn while hidden
pub fn render_overlay(frame: &mut Frame, state: &TooltipState, theme: &Theme) {
    if !state.is_visible() {
        return;
    }

    let lines = wrap_content(&state.props.content, MAX_CONTENT_WIDTH);
    let size = overlay_size(&lines);
    let area = overlay_rect(state.position(), size, state.props.placement, frame.area());

    clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.tooltip_fg))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.tooltip_bg));

    let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(theme.tooltip_fg).bg(theme.tooltip_bg));

    frame.render_widget(paragraph, area);
}

/// Outer size of the overlay for already-wrapped lines
pub fn overlay_size(lines: &[String]) -> Size {
    let widest = lines
        .iter()
        .map(|l| l.width())
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16;
    let height = lines.len().max(1).min(u16::MAX as usize) as u16;

    Size::new(
        widest.saturating_add(HORIZONTAL_CHROME),
        height.saturating_add(VERTICAL_CHROME),
    )
}

/// Greedy word wrap by display width. Words wider than `max_width` get a line of their own.
pub fn wrap_content(content: &str, max_width: u16) -> Vec<String> {
    let max_width = usize::from(max_width.max(1));
    let mut lines = Vec::new();

    for paragraph in content.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.width() + 1 + word.width() <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
#[path = "tooltip_render_tests.rs"]
mod tooltip_render_tests;
