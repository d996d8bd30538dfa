//! Error types for keycalc.
//!
//! Calculation problems are never errors: division by zero shows up as the
//! `"Error"` operand. These variants cover the I/O around the engine.

use std::path::PathBuf;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown key or button: {0:?}")]
    UnknownKey(String),

    #[error("unknown theme: {0:?} (expected dark, light or blue)")]
    UnknownTheme(String),

    #[error("terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("could not determine a {0} directory for this platform")]
    NoDataDir(&'static str),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
