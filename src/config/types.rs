// Configuration type definitions

use serde::Deserialize;

use crate::tooltip::{DEFAULT_DELAY_MS, Placement};

/// Tooltip defaults for the gallery
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TooltipConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub placement: Placement,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            delay_ms: DEFAULT_DELAY_MS,
            placement: Placement::Top,
        }
    }
}

/// Token package location
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokensConfig {
    #[serde(default = "default_tokens_dir")]
    pub dir: String,
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
}

fn default_tokens_dir() -> String {
    "tokens".to_string()
}

fn default_stylesheet() -> String {
    "dist/tokens.css".to_string()
}

impl Default for TokensConfig {
    fn default() -> Self {
        TokensConfig {
            dir: default_tokens_dir(),
            stylesheet: default_stylesheet(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base_title")]
    pub base_title: String,
}

fn default_base_title() -> String {
    "Swatch".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_title: default_base_title(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub tokens: TokensConfig,
    #[serde(default)]
    pub site: SiteConfig,
}
