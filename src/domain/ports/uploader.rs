//! Uploader port - the single capability both protocol clients provide

use std::path::PathBuf;

use thiserror::Error;

use super::TransportError;
use crate::domain::entities::{UploadReport, UploadRequest};
use crate::domain::value_objects::Protocol;

/// Why an upload did not complete
#[derive(Error, Debug)]
pub enum UploadError {
    /// Host unreachable or connection setup failed
    #[error("could not connect to {host}: {source}")]
    Connection {
        host: String,
        #[source]
        source: TransportError,
    },

    /// The server rejected the user name or password (FTP)
    #[error("Login authentication failed")]
    LoginFailed {
        #[source]
        source: TransportError,
    },

    /// SSH session or SFTP channel setup failed (includes authentication)
    #[error("SSH session to {host} failed: {source}")]
    Session {
        host: String,
        #[source]
        source: TransportError,
    },

    /// Directory creation failed for a reason other than "already exists"
    #[error("could not create directory '{path}': {source}")]
    CreateDirectory {
        path: String,
        #[source]
        source: TransportError,
    },

    #[error("could not change into '{path}': {source}")]
    ChangeDirectory {
        path: String,
        #[source]
        source: TransportError,
    },

    #[error("transfer of '{remote}' failed: {source}")]
    Transfer {
        remote: String,
        #[source]
        source: TransportError,
    },

    /// A local file to upload could not be opened
    #[error("could not read {}: {source}", path.display())]
    LocalFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Uploads a package (and optional symbol archive) to a server
pub trait Uploader {
    fn protocol(&self) -> Protocol;

    fn upload(&self, request: &UploadRequest) -> Result<UploadReport, UploadError>;
}
