//! Error types for level generation

use thiserror::Error;

/// Main error type for layout generation
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown layout type: {0}")]
    UnknownLayout(String),

    #[error("Invalid agent count: {0} (need at least one agent)")]
    InvalidAgentCount(i32),

    #[error("Exit pad of width {pad_width} does not fit in a level of width {width}")]
    ExitPadTooWide { pad_width: i32, width: i32 },

    #[error("Layout queried before init")]
    NotInitialized,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
