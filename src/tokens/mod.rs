//! Design tokens
//!
//! Compiled tokens are the single source of colour for every component.
//! This module makes sure they are built and turns them into a [`Theme`].

mod theme;
mod tokens_build;

pub use theme::{Theme, parse_custom_properties};
pub use tokens_build::{
    BuildError, BuildRunner, EnsureOutcome, NpmRunner, TokenPaths, ensure_tokens,
};
