//! Error types for the checkin_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for checkin_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Roster file does not exist
    #[error("Roster file could not be found: {}", .0.display())]
    RosterNotFound(PathBuf),

    /// A roster record could not be parsed
    #[error("Malformed roster at line {line}: {message}")]
    RosterMalformed { line: usize, message: String },

    /// Date not in `YYYY-MM-DD` form
    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Creating or appending to the workout log failed
    #[error("Error while writing workout log {}: {source}", .path.display())]
    WorkoutLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
