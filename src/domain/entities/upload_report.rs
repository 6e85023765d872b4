//! Upload report - what a successful upload did

use std::path::PathBuf;

use crate::domain::value_objects::{Protocol, RemoteDir};

/// One transferred file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub local: PathBuf,
    /// Remote name (FTP, relative to the working directory) or full remote
    /// path (SFTP)
    pub remote: String,
    pub bytes: u64,
}

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub protocol: Protocol,
    pub host: String,
    pub remote_dir: RemoteDir,
    /// Directories created or confirmed to exist, in call order
    pub directories: Vec<String>,
    pub uploaded: Vec<UploadedFile>,
}

impl UploadReport {
    pub fn new(protocol: Protocol, host: impl Into<String>, remote_dir: RemoteDir) -> Self {
        Self {
            protocol,
            host: host.into(),
            remote_dir,
            directories: Vec::new(),
            uploaded: Vec::new(),
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.uploaded.iter().map(|f| f.bytes).sum()
    }
}
