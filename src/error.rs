//! Error types for ipa-ship
//!
//! Uses `thiserror` for library errors. The binary wraps these in
//! `anyhow::Error` and turns them into user-facing text in one place.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration and other non-upload operations
pub type ShipResult<T> = Result<T, ShipError>;

/// Main error type for ipa-ship operations outside the upload flow
#[derive(Error, Debug)]
pub enum ShipError {
    /// Invalid TOML in a config file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Host string could not be parsed
    #[error("invalid host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },

    /// Unknown protocol name
    #[error("unknown protocol '{0}' (expected 'ftp' or 'sftp')")]
    UnknownProtocol(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
