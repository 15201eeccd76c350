//! Error types for the episode tracker.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the episode tracker.
#[derive(Error, Debug)]
pub enum Error {
    // Template inference errors
    #[error("Filenames have different lengths ({0}, {1})")]
    LengthMismatch(usize, usize),

    #[error("No episode numbers found for template: {0}")]
    NoEpisodeNumbersFound(String),

    // Template resolution errors
    #[error("Template has no episode placeholder: {0}")]
    InvalidTemplate(String),

    #[error("No file matches pattern: {0}")]
    EpisodeNotOnDisk(String),

    #[error("Ambiguous candidates for pattern {0}: {1}")]
    AmbiguousEpisodePath(String, String),

    // Database errors
    #[error("Unsupported database format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed database record: {0}")]
    MalformedRecord(String),

    #[error("Series not found: {0}")]
    SeriesNotFound(String),

    #[error("Series already exists: {0}")]
    SeriesAlreadyExists(String),

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // CSV errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
