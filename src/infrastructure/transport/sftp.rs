//! SFTP transport backed by `ssh2` (libssh2)
//!
//! Password authentication only. Host keys are not verified.

use std::io;
use std::io::Read;
use std::net::TcpStream;
use std::path::Path;

use ssh2::{Session, Sftp};
use tracing::trace;

use crate::domain::ports::{SftpConnector, SftpSession, TransportError};
use crate::domain::value_objects::{Credentials, Protocol};

const DIR_MODE: i32 = 0o755;
const DISCONNECT_MESSAGE: &str = "upload finished";

fn ssh_error(e: ssh2::Error) -> TransportError {
    TransportError::other(e.to_string())
}

fn io_error(e: io::Error) -> TransportError {
    TransportError::other(e.to_string())
}

/// Opens password-authenticated SSH sessions with an SFTP channel
#[derive(Debug, Clone, Copy, Default)]
pub struct Ssh2Connector;

impl SftpConnector for Ssh2Connector {
    type Session = Ssh2Session;

    fn open(&self, credentials: &Credentials) -> Result<Self::Session, TransportError> {
        let addr = credentials.host.socket_addr(Protocol::Sftp.default_port());
        trace!(addr = %addr, "ssh connect");
        let tcp = TcpStream::connect(addr.as_str()).map_err(io_error)?;

        let mut session = Session::new().map_err(ssh_error)?;
        session.set_tcp_stream(tcp);
        session.handshake().map_err(ssh_error)?;
        session
            .userauth_password(&credentials.username, credentials.secret())
            .map_err(ssh_error)?;
        if !session.authenticated() {
            return Err(TransportError::other("Authentication failed"));
        }

        let sftp = session.sftp().map_err(ssh_error)?;
        Ok(Ssh2Session {
            session,
            sftp: Some(sftp),
        })
    }
}

/// An SSH session with an open SFTP channel
pub struct Ssh2Session {
    session: Session,
    sftp: Option<Sftp>,
}

impl Ssh2Session {
    fn sftp(&self) -> Result<&Sftp, TransportError> {
        self.sftp
            .as_ref()
            .ok_or_else(|| TransportError::other("SFTP channel is closed"))
    }
}

impl SftpSession for Ssh2Session {
    fn ensure_dir(&mut self, path: &str) -> Result<(), TransportError> {
        let sftp = self.sftp()?;
        let dir = Path::new(path);
        if sftp.stat(dir).map(|st| st.is_dir()).unwrap_or(false) {
            trace!(dir = %path, "sftp directory exists");
            return Ok(());
        }
        match sftp.mkdir(dir, DIR_MODE) {
            Ok(()) => Ok(()),
            // Lost a race with another uploader
            Err(_) if sftp.stat(dir).map(|st| st.is_dir()).unwrap_or(false) => Ok(()),
            Err(e) => Err(ssh_error(e)),
        }
    }

    fn upload(&mut self, remote_path: &str, reader: &mut dyn Read) -> Result<u64, TransportError> {
        let sftp = self.sftp()?;
        let mut remote = sftp.create(Path::new(remote_path)).map_err(ssh_error)?;
        io::copy(reader, &mut remote).map_err(io_error)
    }

    fn close_channel(&mut self) -> Result<(), TransportError> {
        self.sftp.take();
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), TransportError> {
        self.session
            .disconnect(None, DISCONNECT_MESSAGE, None)
            .map_err(ssh_error)
    }
}
