use thiserror::Error;

/// Custom error types for swatch
#[derive(Debug, Error)]
pub enum SwatchError {
    #[error(
        "main navigation accessed outside its provider.\n\nMount a NavigationProvider at the top of the app before reading navigation state."
    )]
    NavigationContextMissing,

    #[error("Invalid config: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
