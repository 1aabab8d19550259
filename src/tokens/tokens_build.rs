//! Design-token install step
//!
//! Makes sure the compiled token stylesheet exists before the UI renders.
//! When it is missing, the token package's own `build` script produces it.
//! The step is fail-open: every failure is logged and reported in the
//! outcome, never returned as an error, so an install never aborts here.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use thiserror::Error;

pub const PACKAGE_DESCRIPTOR: &str = "package.json";
pub const BUILD_SCRIPT: &str = "build";

/// Where the token package lives and what it compiles to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPaths {
    pub package_dir: PathBuf,
    /// Compiled stylesheet, relative to `package_dir` unless absolute
    pub stylesheet: PathBuf,
}

impl TokenPaths {
    pub fn new(package_dir: impl Into<PathBuf>, stylesheet: impl Into<PathBuf>) -> Self {
        Self {
            package_dir: package_dir.into(),
            stylesheet: stylesheet.into(),
        }
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.package_dir.join(&self.stylesheet)
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.package_dir.join(PACKAGE_DESCRIPTOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// Stylesheet already present, nothing was run
    AlreadyBuilt,
    /// No usable package descriptor or no build script
    NothingToDo,
    /// Build ran and produced the stylesheet
    Built,
    /// Build was attempted and failed; installation carries on
    Failed(String),
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{0} not found in PATH")]
    ToolNotFound(String),

    #[error("build exited with {0}")]
    ExitStatus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the token package's build script
pub trait BuildRunner {
    fn run_build(&mut self, package_dir: &Path) -> Result<(), BuildError>;
}

/// Runs `npm run build` in the package directory
#[derive(Debug, Default)]
pub struct NpmRunner;

impl BuildRunner for NpmRunner {
    fn run_build(&mut self, package_dir: &Path) -> Result<(), BuildError> {
        let npm = which::which("npm").map_err(|_| BuildError::ToolNotFound("npm".to_string()))?;

        log::info!("Building design tokens in {}", package_dir.display());
        let status = Command::new(npm)
            .args(["run", BUILD_SCRIPT])
            .current_dir(package_dir)
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(BuildError::ExitStatus(status.to_string()))
        }
    }
}

#[derive(Debug, Deserialize)]
struct PackageDescriptor {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    scripts: BTreeMap<String, String>,
}

/// Ensure the compiled stylesheet exists, building it if needed
pub fn ensure_tokens(paths: &TokenPaths, runner: &mut dyn BuildRunner) -> EnsureOutcome {
    let stylesheet = paths.stylesheet_path();
    if stylesheet.exists() {
        log::debug!("Design tokens already built at {}", stylesheet.display());
        return EnsureOutcome::AlreadyBuilt;
    }

    let Some(descriptor) = read_descriptor(&paths.descriptor_path()) else {
        return EnsureOutcome::NothingToDo;
    };

    if !descriptor.scripts.contains_key(BUILD_SCRIPT) {
        log::debug!(
            "Token package {} has no build script",
            descriptor.name.as_deref().unwrap_or("<unnamed>")
        );
        return EnsureOutcome::NothingToDo;
    }

    if let Err(e) = runner.run_build(&paths.package_dir) {
        log::warn!("Design token build failed: {}", e);
        return EnsureOutcome::Failed(e.to_string());
    }

    if stylesheet.exists() {
        EnsureOutcome::Built
    } else {
        let reason = format!("build finished but {} is missing", stylesheet.display());
        log::warn!("Design token build failed: {}", reason);
        EnsureOutcome::Failed(reason)
    }
}

/// A missing or malformed descriptor means there is nothing to build
fn read_descriptor(path: &Path) -> Option<PackageDescriptor> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("No token package descriptor at {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(descriptor) => Some(descriptor),
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[path = "tokens_build_tests.rs"]
mod tokens_build_tests;
