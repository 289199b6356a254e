//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file missing or unreadable
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not a valid document
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Required value is empty after env overrides
    #[error("Missing config value: {0}")]
    Missing(&'static str),

    /// Endpoint is not an absolute http(s) URL
    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: request construction, connection or body read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Read endpoint body does not have the `DATA.rows[].comment` shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Top-level error for a batch run
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    /// Submission worker panicked or was cancelled
    #[error("Submission worker failed: {0}")]
    Worker(String),

    /// Fewer saved entries found than were submitted
    #[error("Verification incomplete: {matched} of {expected} entries found")]
    Incomplete { matched: usize, expected: usize },
}

impl BatchError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            BatchError::Incomplete { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type for a batch run
pub type BatchResult<T> = Result<T, BatchError>;
