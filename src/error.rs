//! Crate-level error types.

use std::fmt;

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The subject model failed to load.
    AssetLoad(String),
    /// Malformed replay script line.
    Replay {
        /// 1-based line number in the script.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::AssetLoad(msg) => write!(f, "asset load error: {msg}"),
            Self::Replay { line, reason } => {
                write!(f, "replay script line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
