//! Theme resolved from compiled design tokens
//!
//! The token package compiles to a stylesheet of CSS custom properties. Only
//! the `--name: value;` declarations are read; anything else in the file is
//! ignored.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;

/// Semantic colours used by the components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub tooltip_bg: Color,
    pub tooltip_fg: Color,
    /// Every token found in the stylesheet, including ones the components don't use
    pub tokens: BTreeMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            surface: Color::Reset,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            tooltip_bg: Color::Black,
            tooltip_fg: Color::Yellow,
            tokens: BTreeMap::new(),
        }
    }
}

impl Theme {
    /// Build a theme from stylesheet text, falling back to defaults per colour
    pub fn from_stylesheet(css: &str) -> Self {
        let tokens = parse_custom_properties(css);
        let fallback = Theme::default();
        let color = |name: &str, default: Color| {
            tokens
                .get(name)
                .and_then(|value| Color::from_str(value).ok())
                .unwrap_or(default)
        };

        Self {
            primary: color("color-primary", fallback.primary),
            surface: color("color-surface", fallback.surface),
            text: color("color-text", fallback.text),
            muted: color("color-muted", fallback.muted),
            border: color("color-border", fallback.border),
            tooltip_bg: color("tooltip-bg", fallback.tooltip_bg),
            tooltip_fg: color("tooltip-fg", fallback.tooltip_fg),
            tokens,
        }
    }

    /// Load the theme from a compiled stylesheet
    ///
    /// Returns the default theme and a warning when the file can't be read.
    pub fn load(path: &Path) -> (Self, Option<String>) {
        match fs::read_to_string(path) {
            Ok(css) => (Self::from_stylesheet(&css), None),
            Err(e) => (
                Self::default(),
                Some(format!(
                    "Design tokens not loaded from {}: {}. Using default theme.",
                    path.display(),
                    e
                )),
            ),
        }
    }
}

/// Extract `--name: value;` declarations. Later declarations win.
pub fn parse_custom_properties(css: &str) -> BTreeMap<String, String> {
    let mut tokens = BTreeMap::new();

    for declaration in strip_comments(css).split(['{', '}', ';']) {
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        let Some(name) = name.trim().strip_prefix("--") else {
            continue;
        };
        let value = value.trim();
        if name.is_empty() || value.is_empty() {
            continue;
        }
        tokens.insert(name.to_string(), value.to_string());
    }

    tokens
}

/// Remove `/* ... */` comments. An unterminated comment runs to the end.
fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;

    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod theme_tests;
