//! Documentation gallery
//!
//! One page per component, each rendering live demos inside the app shell.

mod events;
mod pages;
mod render;
mod state;

pub use pages::{Page, nav_tree};
pub use state::{App, CheckboxItem, TriggerSpec, page_triggers};
