pub mod breadcrumbs;
pub mod checkbox;
pub mod config;
pub mod error;
pub mod gallery;
pub mod layout;
pub mod navigation;
pub mod page_title;
pub mod timer;
pub mod tokens;
pub mod tooltip;
pub mod widgets;
