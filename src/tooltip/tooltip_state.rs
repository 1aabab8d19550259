use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::placement::{Placement, Position, anchor_for};
use crate::timer::TimerSlot;

pub const DEFAULT_DELAY_MS: u64 = 500;

/// Tooltip configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipProps {
    pub content: String,
    pub placement: Placement,
    pub delay: Duration,
}

impl TooltipProps {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            placement: Placement::default(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

/// Per-instance tooltip state
///
/// Every path that abandons a hover intent (leave, re-entry, unmount) goes
/// through [`TooltipState::cancel_pending`].
pub struct TooltipState {
    pub props: TooltipProps,
    visibility: Visibility,
    /// Anchor captured on the most recent pointer-enter
    position: Position,
    /// Wrapper rect from the most recent render
    trigger: Option<Rect>,
    hovered: bool,
    timer: TimerSlot,
    mounted: bool,
}

impl TooltipState {
    pub fn new(props: TooltipProps) -> Self {
        Self {
            props,
            visibility: Visibility::Hidden,
            position: Position::default(),
            trigger: None,
            hovered: false,
            timer: TimerSlot::new(),
            mounted: true,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn trigger(&self) -> Option<Rect> {
        self.trigger
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Deadline of the pending show timer, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.pending().map(|t| t.deadline)
    }

    /// Record where the wrapper was laid out this frame
    pub fn set_trigger(&mut self, rect: Rect) {
        if self.mounted {
            self.trigger = Some(rect);
        }
    }

    /// The wrapper was not laid out this frame. Drops the recorded rect so
    /// the blank area can't be hovered, and ends any hover in progress.
    pub fn clear_trigger(&mut self) {
        self.trigger = None;
        if self.hovered {
            self.on_pointer_leave();
        }
    }

    pub fn on_pointer_enter(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }

        self.cancel_pending();
        self.hovered = true;
        if let Some(rect) = self.trigger {
            self.position = anchor_for(rect);
        }
        self.timer.schedule(now, self.props.delay);
    }

    pub fn on_pointer_leave(&mut self) {
        if !self.mounted {
            return;
        }

        self.cancel_pending();
        self.hovered = false;
        self.visibility = Visibility::Hidden;
    }

    /// Fire the show timer if its deadline has passed. Returns true when
    /// visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }

        if self.timer.poll(now).is_some() && self.visibility == Visibility::Hidden {
            self.visibility = Visibility::Shown;
            return true;
        }
        false
    }

    /// Dispose the instance; no further transitions happen afterwards
    pub fn unmount(&mut self) {
        self.cancel_pending();
        self.visibility = Visibility::Hidden;
        self.hovered = false;
        self.trigger = None;
        self.mounted = false;
    }

    fn cancel_pending(&mut self) {
        self.timer.cancel();
    }
}

impl Drop for TooltipState {
    fn drop(&mut self) {
        if self.mounted {
            self.unmount();
        }
    }
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;
