//! Configuration loading
//!
//! Reads `~/.config/swatch/config.toml`. A missing file means defaults; a
//! malformed one means defaults plus a warning the gallery shows in its
//! footer, so a bad config never stops the app from starting.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, SiteConfig, TokensConfig, TooltipConfig};

use crate::error::SwatchError;

const CONFIG_DIR: &str = "swatch";
const CONFIG_FILE: &str = "config.toml";

/// Loaded config and an optional warning to surface to the user
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{} ({}). Using defaults.", e, path.display())),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, SwatchError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, SwatchError> {
    toml::from_str(contents).map_err(|e| SwatchError::ConfigParse(e.message().to_string()))
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
