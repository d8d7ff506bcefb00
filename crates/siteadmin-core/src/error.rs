//! Error types for siteadmin-core

use thiserror::Error;

/// Result type alias using siteadmin-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in siteadmin-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Settings API answered with a non-success status
    #[error("Settings API request failed with HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// OS keyring error
    #[error("Secure storage error: {0}")]
    SecureStorage(String),
}
