//! SFTP Uploader
//!
//! Opens one SSH session, makes sure the destination exists with a single
//! `ensure_dir` call and writes each file to `<dir>/<basename>`. The channel
//! and the session are shut down exactly once on every path.

use std::fs::File;

use tracing::{debug, info, warn};

use crate::application::expand::PathExpander;
use crate::domain::entities::{remote_file_name, UploadReport, UploadRequest, UploadedFile};
use crate::domain::ports::{SftpConnector, SftpSession, UploadError, Uploader};
use crate::domain::value_objects::{Credentials, Protocol};

/// Uploads over SFTP through an [`SftpConnector`]
pub struct SftpUploader<C: SftpConnector> {
    credentials: Credentials,
    connector: C,
    expander: PathExpander,
}

impl<C: SftpConnector> SftpUploader<C> {
    pub fn new(credentials: Credentials, connector: C, expander: PathExpander) -> Self {
        Self {
            credentials,
            connector,
            expander,
        }
    }

    fn run(
        &self,
        session: &mut C::Session,
        request: &UploadRequest,
    ) -> Result<UploadReport, UploadError> {
        let remote_dir = self
            .expander
            .expand(request.package_path(), request.destination());
        let mut report = UploadReport::new(
            Protocol::Sftp,
            self.credentials.host.to_string(),
            remote_dir.clone(),
        );

        if request.create_directories() && !remote_dir.is_empty() {
            let dir = remote_dir.working_dir();
            session
                .ensure_dir(&dir)
                .map_err(|source| UploadError::CreateDirectory {
                    path: dir.clone(),
                    source,
                })?;
            debug!(dir = %dir, "directory ready");
            report.directories.push(dir);
        }

        for local in request.files() {
            let remote = remote_dir.join(&remote_file_name(local));
            let mut file = File::open(local).map_err(|source| UploadError::LocalFile {
                path: local.to_path_buf(),
                source,
            })?;
            let bytes = session
                .upload(&remote, &mut file)
                .map_err(|source| UploadError::Transfer {
                    remote: remote.clone(),
                    source,
                })?;
            info!(file = %remote, bytes, "uploaded");
            report.uploaded.push(UploadedFile {
                local: local.to_path_buf(),
                remote,
                bytes,
            });
        }

        Ok(report)
    }
}

impl<C: SftpConnector> Uploader for SftpUploader<C> {
    fn protocol(&self) -> Protocol {
        Protocol::Sftp
    }

    fn upload(&self, request: &UploadRequest) -> Result<UploadReport, UploadError> {
        let host = &self.credentials.host;
        debug!(host = %host, user = %self.credentials.username, "opening SSH session");
        let mut session =
            self.connector
                .open(&self.credentials)
                .map_err(|source| UploadError::Session {
                    host: host.to_string(),
                    source,
                })?;

        let outcome = self.run(&mut session, request);

        if let Err(e) = session.close_channel() {
            warn!(host = %host, error = %e, "closing SFTP channel failed");
        }
        if let Err(e) = session.shutdown() {
            warn!(host = %host, error = %e, "SSH disconnect failed");
        }
        outcome
    }
}
