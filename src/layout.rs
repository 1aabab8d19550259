//! Layout module for tracking UI component regions
//!
//! Render records where clickable things ended up in `LayoutRegions`, and
//! `region_at()` maps a pointer position back to one of them. Tooltip
//! overlays are deliberately never recorded here.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
