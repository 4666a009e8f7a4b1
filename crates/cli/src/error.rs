use std::path::PathBuf;

use crate::matcher::MatchError;

/// Sift error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed comment input
    #[error("input error: {path}: {message}")]
    Input { path: PathBuf, message: String },

    /// Method selector outside the supported set. Never mapped to a
    /// "no match" verdict; callers see the failure.
    #[error(
        "unsupported method \"{name}\" (expected prefix-scan, skip-scan, rolling-hash, or heuristic)"
    )]
    UnsupportedMethod { name: String },

    /// A matcher rejected its input
    #[error("pattern error: {0}")]
    Pattern(#[from] MatchError),
}

/// Result type using sift Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Scan completed and nothing was flagged
    Success = 0,
    /// Scan flagged at least one comment
    Flagged = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. }
            | Error::Argument(_)
            | Error::Input { .. }
            | Error::UnsupportedMethod { .. }
            | Error::Pattern(_) => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
