//! Pointer enter/leave detection
//!
//! The terminal only reports pointer positions, so enter and leave are
//! derived by comparing each position against the wrapper rect recorded at
//! the last render. Overlays are never hit-tested, which keeps a shown
//! tooltip from generating enter/leave cycles of its own.

use std::time::Instant;

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::placement::anchor_for;
use super::tooltip_state::TooltipState;

/// Hover transition produced by a pointer move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    Entered,
    Left,
    Unchanged,
}

/// Update one tooltip for a pointer at `(column, row)`
pub fn handle_pointer_at(state: &mut TooltipState, column: u16, row: u16, now: Instant) -> HoverChange {
    let inside = state
        .trigger()
        .is_some_and(|rect| rect.contains(Position::new(column, row)));

    match (state.is_hovered(), inside) {
        (false, true) => {
            state.on_pointer_enter(now);
            HoverChange::Entered
        }
        (true, false) => {
            state.on_pointer_leave();
            HoverChange::Left
        }
        _ => HoverChange::Unchanged,
    }
}

/// Re-check hover for a pointer that hasn't moved while the layout has.
///
/// A hovered tooltip whose trigger moved away is left. One whose trigger
/// moved but is still under the pointer is entered again, so the delay
/// restarts from the new anchor.
pub fn resync_pointer(state: &mut TooltipState, column: u16, row: u16, now: Instant) -> HoverChange {
    let change = handle_pointer_at(state, column, row, now);
    if change != HoverChange::Unchanged || !state.is_hovered() {
        return change;
    }

    match state.trigger() {
        Some(rect) if anchor_for(rect) != state.position() => {
            state.on_pointer_enter(now);
            HoverChange::Entered
        }
        _ => HoverChange::Unchanged,
    }
}

/// Route a mouse event to every tooltip. Returns true if any hover state changed.
pub fn handle_mouse(tooltips: &mut [TooltipState], mouse: MouseEvent, now: Instant) -> bool {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
            let mut changed = false;
            for tooltip in tooltips.iter_mut() {
                changed |= handle_pointer_at(tooltip, mouse.column, mouse.row, now)
                    != HoverChange::Unchanged;
            }
            changed
        }
        _ => false,
    }
}

/// Pointer left the terminal or focus was lost
pub fn leave_all(tooltips: &mut [TooltipState]) {
    for tooltip in tooltips.iter_mut().filter(|t| t.is_hovered()) {
        tooltip.on_pointer_leave();
    }
}

/// Advance all tooltip timers. Returns true if anything became visible.
pub fn tick_all(tooltips: &mut [TooltipState], now: Instant) -> bool {
    let mut changed = false;
    for tooltip in tooltips.iter_mut() {
        changed |= tooltip.tick(now);
    }
    changed
}

/// Earliest pending show deadline across `tooltips`
pub fn next_deadline(tooltips: &[TooltipState]) -> Option<Instant> {
    tooltips.iter().filter_map(TooltipState::next_deadline).min()
}

#[cfg(test)]
#[path = "tooltip_events_tests.rs"]
mod tooltip_events_tests;
