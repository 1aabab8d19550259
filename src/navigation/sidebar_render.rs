//! Sidebar rendering
//!
//! Expanded, the sidebar lists the whole tree indented by depth. Collapsed,
//! it shows only the initial of each top-level entry.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::nav_context::NavigationState;
use super::nav_item::{FlatItem, NavItem, flatten};
use crate::tokens::Theme;

/// Screen row occupied by one sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarRow {
    pub area: Rect,
    pub href: String,
}

/// Entries visible for the current collapse state, in display order
pub fn visible_items<'a>(items: &'a [NavItem], state: &NavigationState) -> Vec<FlatItem<'a>> {
    if state.collapsed {
        items.iter().map(|item| FlatItem { item, depth: 0 }).collect()
    } else {
        flatten(items)
    }
}

fn entry_text(entry: &FlatItem<'_>, collapsed: bool) -> String {
    if collapsed {
        return entry
            .item
            .label()
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
    }

    let marker = match entry.item {
        NavItem::Branch { .. } => "▾ ",
        NavItem::Leaf { .. } => "  ",
    };
    format!("{}{}{}", "  ".repeat(entry.depth), marker, entry.item.label())
}

/// Render the sidebar and return the rows it occupies for hit-testing
pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    items: &[NavItem],
    state: &NavigationState,
    theme: &Theme,
) -> Vec<SidebarRow> {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);

    let entries = visible_items(items, state);
    let mut rows = Vec::with_capacity(entries.len());
    let mut lines = Vec::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        let text = entry_text(entry, state.collapsed);
        let style = if entry.item.href() == state.active_href {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(Span::styled(text, style)));

        let row_y = inner.y.saturating_add(i as u16);
        if row_y < inner.bottom() {
            rows.push(SidebarRow {
                area: Rect::new(inner.x, row_y, inner.width, 1),
                href: entry.item.href().to_string(),
            });
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
    rows
}

/// Href of the sidebar row under `(column, row)`
pub fn href_at(rows: &[SidebarRow], column: u16, row: u16) -> Option<&str> {
    rows.iter()
        .find(|r| r.area.contains(ratatui::layout::Position::new(column, row)))
        .map(|r| r.href.as_str())
}

#[cfg(test)]
#[path = "sidebar_render_tests.rs"]
mod sidebar_render_tests;
