//! Navigation module
//!
//! The static page tree, the collapsed/active state shared across the app,
//! and the shell that puts a sidebar next to the page content.

mod nav_context;
mod nav_item;
mod shell;
mod sidebar_render;

pub use nav_context::{NavigationHandle, NavigationProvider, NavigationState, use_main_navigation};
pub use nav_item::{FlatItem, NavItem, find_trail, flatten};
pub use shell::{COLLAPSED_SIDEBAR_WIDTH, SIDEBAR_WIDTH, ShellAreas, shell_layout};
pub use sidebar_render::{SidebarRow, href_at, render_sidebar, visible_items};
