//! Transport ports - the FTP and SFTP client libraries seen from the uploaders
//!
//! Each protocol has a connector (creates a live connection) and the
//! connection itself. Connectors take `&self`, so one connector can serve
//! several uploads.

use std::io::Read;

use thiserror::Error;

use crate::domain::value_objects::{Credentials, HostAddress};

/// Coarse classification of a transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// A directory (or file) with that name is already there
    AlreadyExists,
    /// Anything else
    Other,
}

/// Failure reported by a transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    kind: TransportErrorKind,
    message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Other, message)
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::AlreadyExists, message)
    }

    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind == TransportErrorKind::AlreadyExists
    }
}

/// Opens FTP control connections
pub trait FtpConnector {
    type Connection: FtpConnection;

    /// Connect to `host` with passive-mode data transfers
    fn connect(&self, host: &HostAddress) -> Result<Self::Connection, TransportError>;
}

/// A connected FTP session
pub trait FtpConnection {
    /// Authenticate (USER/PASS only)
    fn login(&mut self, username: &str, password: &str) -> Result<(), TransportError>;

    /// Switch to binary (`TYPE I`) transfers
    fn binary_mode(&mut self) -> Result<(), TransportError>;

    /// Create one directory (no parents)
    fn mkdir(&mut self, path: &str) -> Result<(), TransportError>;

    /// Change the working directory
    fn cwd(&mut self, path: &str) -> Result<(), TransportError>;

    /// Store `reader` in binary mode as `remote_name`, returning bytes sent
    fn put_binary(&mut self, remote_name: &str, reader: &mut dyn Read)
        -> Result<u64, TransportError>;

    /// End the session
    fn close(&mut self) -> Result<(), TransportError>;
}

/// Opens authenticated SSH sessions with an SFTP channel
pub trait SftpConnector {
    type Session: SftpSession;

    fn open(&self, credentials: &Credentials) -> Result<Self::Session, TransportError>;
}

/// An SFTP channel on top of an SSH session
pub trait SftpSession {
    /// Make sure `path` exists as a directory
    fn ensure_dir(&mut self, path: &str) -> Result<(), TransportError>;

    /// Write `reader` to `remote_path`, returning bytes sent
    fn upload(&mut self, remote_path: &str, reader: &mut dyn Read) -> Result<u64, TransportError>;

    /// Close the SFTP channel
    fn close_channel(&mut self) -> Result<(), TransportError>;

    /// Disconnect the SSH session
    fn shutdown(&mut self) -> Result<(), TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_message() {
        let err = TransportError::other("530 Login incorrect.");
        assert_eq!(err.to_string(), "530 Login incorrect.");
        assert_eq!(err.kind(), TransportErrorKind::Other);
    }

    #[test]
    fn already_exists_kind() {
        let err = TransportError::already_exists("550 File exists");
        assert!(err.is_already_exists());
        assert_eq!(err.message(), "550 File exists");
    }
}
