//! Tooltip module
//!
//! Descriptive text shown next to a trigger after the pointer has rested on
//! it for a delay, and hidden as soon as the pointer leaves. Each tooltip
//! owns its visibility, its captured anchor and at most one pending show
//! timer.

mod placement;
pub mod tooltip_events;
mod tooltip_render;
mod tooltip_state;

pub use placement::{Offset, Placement, Position, Transform, anchor_for, overlay_rect};
pub use tooltip_render::{render_overlay, render_trigger, wrap_content};
pub use tooltip_state::{DEFAULT_DELAY_MS, TooltipProps, TooltipState, Visibility};
