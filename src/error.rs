//! Error types for shien
//!
//! Fatal failures (configuration, fetching, CSV reading) and the one
//! recoverable user-input error share a single enum.

use std::path::PathBuf;
use thiserror::Error;

/// Message printed when a day or week expression cannot be understood
pub const INVALID_ARGUMENT_MESSAGE: &str = "invalid argument. format must be like 3/9 or integer.";

/// Main error type for shien
#[derive(Error, Debug)]
pub enum ShienError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Transport failure while fetching the schedule
    #[error("Fetch error: request to {url} failed")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The spreadsheet endpoint answered with a non-success status
    #[error("Fetch error: {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Malformed CSV data
    #[error("CSV error: {message}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Day or week expression that is neither M/D nor an integer
    #[error("{msg}", msg = INVALID_ARGUMENT_MESSAGE)]
    InvalidArgument { input: String },
}

impl ShienError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new fetch error
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }

    /// Create a new HTTP status error
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a new CSV error
    pub fn csv(message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(input: impl Into<String>) -> Self {
        Self::InvalidArgument {
            input: input.into(),
        }
    }

    /// Whether this error is a recoverable user-input error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ShienError>;
