//! FTP Uploader
//!
//! 1. Connect (passive mode)
//! 2. Log in
//! 3. Resolve the destination template
//! 4. Create every ancestor directory, shortest first (optional)
//! 5. Change into the destination
//! 6. Switch to binary mode
//! 7. Store the package, then the symbol archive
//! 8. Close the connection
//!
//! Steps 2-7 live in `run`; `upload` closes the connection exactly once
//! after it returns, whatever the outcome.

use std::fs::File;

use tracing::{debug, info, warn};

use crate::application::expand::PathExpander;
use crate::domain::entities::{remote_file_name, UploadReport, UploadRequest, UploadedFile};
use crate::domain::ports::{FtpConnection, FtpConnector, UploadError, Uploader};
use crate::domain::value_objects::{Credentials, Protocol, RemoteDir};

/// Uploads over plain FTP through an [`FtpConnector`]
pub struct FtpUploader<C: FtpConnector> {
    credentials: Credentials,
    connector: C,
    expander: PathExpander,
}

impl<C: FtpConnector> FtpUploader<C> {
    pub fn new(credentials: Credentials, connector: C, expander: PathExpander) -> Self {
        Self {
            credentials,
            connector,
            expander,
        }
    }

    fn run(
        &self,
        conn: &mut C::Connection,
        request: &UploadRequest,
    ) -> Result<UploadReport, UploadError> {
        conn.login(&self.credentials.username, self.credentials.secret())
            .map_err(|source| UploadError::LoginFailed { source })?;
        debug!(user = %self.credentials.username, "logged in");

        let remote_dir = self
            .expander
            .expand(request.package_path(), request.destination());
        let mut report = UploadReport::new(
            Protocol::Ftp,
            self.credentials.host.to_string(),
            remote_dir.clone(),
        );

        if request.create_directories() {
            create_ancestors(conn, &remote_dir, &mut report)?;
        }

        if !remote_dir.is_empty() {
            let dir = remote_dir.working_dir();
            conn.cwd(&dir)
                .map_err(|source| UploadError::ChangeDirectory {
                    path: dir.clone(),
                    source,
                })?;
            debug!(dir = %dir, "changed directory");
        }

        conn.binary_mode()
            .map_err(|source| UploadError::Transfer {
                remote: remote_file_name(request.package_path()),
                source,
            })?;

        for local in request.files() {
            let name = remote_file_name(local);
            let mut file = File::open(local).map_err(|source| UploadError::LocalFile {
                path: local.to_path_buf(),
                source,
            })?;
            let bytes = conn
                .put_binary(&name, &mut file)
                .map_err(|source| UploadError::Transfer {
                    remote: name.clone(),
                    source,
                })?;
            info!(file = %name, bytes, "stored");
            report.uploaded.push(UploadedFile {
                local: local.to_path_buf(),
                remote: name,
                bytes,
            });
        }

        Ok(report)
    }
}

fn create_ancestors<Conn: FtpConnection>(
    conn: &mut Conn,
    remote_dir: &RemoteDir,
    report: &mut UploadReport,
) -> Result<(), UploadError> {
    for prefix in remote_dir.prefixes() {
        match conn.mkdir(&prefix) {
            Ok(()) => debug!(dir = %prefix, "created directory"),
            Err(e) if e.is_already_exists() => debug!(dir = %prefix, "directory already exists"),
            Err(source) => {
                return Err(UploadError::CreateDirectory {
                    path: prefix,
                    source,
                })
            }
        }
        report.directories.push(prefix);
    }
    Ok(())
}

impl<C: FtpConnector> Uploader for FtpUploader<C> {
    fn protocol(&self) -> Protocol {
        Protocol::Ftp
    }

    fn upload(&self, request: &UploadRequest) -> Result<UploadReport, UploadError> {
        let host = &self.credentials.host;
        debug!(host = %host, "connecting");
        let mut conn = self
            .connector
            .connect(host)
            .map_err(|source| UploadError::Connection {
                host: host.to_string(),
                source,
            })?;

        let outcome = self.run(&mut conn, request);

        if let Err(e) = conn.close() {
            warn!(host = %host, error = %e, "closing FTP connection failed");
        }
        outcome
    }
}
