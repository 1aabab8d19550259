//! Gallery event handling
//!
//! Keys drive page navigation and the checkbox demo; pointer moves drive
//! the tooltips; clicks select sidebar entries and toggle checkboxes.

use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use ratatui::layout::Position;

use super::pages::Page;
use super::state::App;
use crate::error::SwatchError;
use crate::layout::{Region, region_at};
use crate::navigation::use_main_navigation;
use crate::tooltip::tooltip_events;

impl App {
    /// Handle one terminal event. Returns true when a redraw is needed.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> Result<bool, SwatchError> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => Ok(self.handle_mouse(mouse, now)),
            Event::FocusLost => {
                self.pointer = None;
                tooltip_events::leave_all(&mut self.tooltips);
                Ok(true)
            }
            Event::Resize(_, _) => Ok(true),
            _ => Ok(false),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<bool, SwatchError> {
        if self.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.help_visible = false;
                return Ok(true);
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.quit();
                Ok(false)
            }
            KeyCode::Char('?') => {
                self.help_visible = true;
                Ok(true)
            }
            KeyCode::Char('[') => {
                let nav = use_main_navigation()?;
                let collapsed = nav.toggle_collapsed();
                log::debug!("Sidebar collapsed: {}", collapsed);
                Ok(true)
            }
            KeyCode::Char('j') | KeyCode::Down => Ok(self.navigate_relative(1)),
            KeyCode::Char('k') | KeyCode::Up => Ok(self.navigate_relative(-1)),
            KeyCode::Tab if self.page == Page::Checkbox => {
                self.focus_next_checkbox();
                Ok(true)
            }
            KeyCode::Char(' ') | KeyCode::Enter if self.page == Page::Checkbox => {
                Ok(self.toggle_checkbox(self.focused_checkbox))
            }
            _ => Ok(false),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        if matches!(
            mouse.kind,
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_)
        ) {
            self.pointer = Some(Position::new(mouse.column, mouse.row));
        }
        let mut changed = tooltip_events::handle_mouse(&mut self.tooltips, mouse, now);

        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            match region_at(&self.layout_regions, mouse.column, mouse.row) {
                Some(Region::SidebarItem(href)) => changed |= self.navigate(&href),
                Some(Region::Checkbox(index)) => {
                    self.focused_checkbox = index;
                    changed |= self.toggle_checkbox(index);
                }
                Some(Region::Content) | None => {}
            }
        }

        changed
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
