//! Tooltip anchor and placement math
//!
//! The anchor is always the horizontal centre of the trigger's top edge.
//! Placement only decides how the overlay is translated relative to that
//! point, expressed the same way a CSS `translate()` would be: percentages
//! of the overlay's own size, or fixed pixel offsets.

use std::fmt;

use ratatui::layout::{Rect, Size};
use serde::Deserialize;

/// Pixels per terminal column when resolving pixel offsets
pub const PX_PER_COLUMN: i32 = 10;
/// Pixels per terminal row when resolving pixel offsets
pub const PX_PER_ROW: i32 = 20;

/// Gap between anchor and overlay for bottom/right placements
const GAP_PX: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    pub const ALL: [Placement; 4] = [
        Placement::Top,
        Placement::Bottom,
        Placement::Left,
        Placement::Right,
    ];

    pub fn transform(self) -> Transform {
        match self {
            Placement::Top => Transform::new(Offset::Percent(-50), Offset::Percent(-100)),
            Placement::Bottom => Transform::new(Offset::Percent(-50), Offset::Px(GAP_PX)),
            Placement::Left => Transform::new(Offset::Percent(-100), Offset::Percent(-50)),
            Placement::Right => Transform::new(Offset::Px(GAP_PX), Offset::Percent(-50)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }
}

/// A point in terminal cell space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Anchor point for a trigger rect: centre of the top edge
pub fn anchor_for(trigger: Rect) -> Position {
    Position {
        x: trigger.x.saturating_add(trigger.width / 2),
        y: trigger.y,
    }
}

/// One axis of a translate transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    /// Percentage of the overlay's own extent on this axis
    Percent(i32),
    /// Fixed pixel offset
    Px(i32),
}

impl Offset {
    /// Resolve to a signed cell offset for an overlay `extent` cells long
    fn resolve(self, extent: u16, px_per_cell: i32) -> i32 {
        match self {
            Offset::Percent(pct) => i32::from(extent) * pct / 100,
            Offset::Px(px) if px >= 0 => (px + px_per_cell - 1) / px_per_cell,
            Offset::Px(px) => -((-px + px_per_cell - 1) / px_per_cell),
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Percent(pct) => write!(f, "{}%", pct),
            Offset::Px(px) => write!(f, "{}px", px),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    pub x: Offset,
    pub y: Offset,
}

impl Transform {
    pub const fn new(x: Offset, y: Offset) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}, {})", self.x, self.y)
    }
}

/// Place an overlay of `size` at `anchor` for `placement`, clamped into `area`
pub fn overlay_rect(anchor: Position, size: Size, placement: Placement, area: Rect) -> Rect {
    let transform = placement.transform();
    let dx = transform.x.resolve(size.width, PX_PER_COLUMN);
    let dy = transform.y.resolve(size.height, PX_PER_ROW);

    let width = size.width.min(area.width);
    let height = size.height.min(area.height);

    let max_x = i32::from(area.right()) - i32::from(width);
    let max_y = i32::from(area.bottom()) - i32::from(height);

    let x = (i32::from(anchor.x) + dx).clamp(i32::from(area.x), max_x);
    let y = (i32::from(anchor.y) + dy).clamp(i32::from(area.y), max_y);

    // Both values were clamped into `area`, which lives in u16 space
    Rect {
        x: x as u16,
        y: y as u16,
        width,
        height,
    }
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod placement_tests;
