//! FTP transport backed by `suppaftp`
//!
//! Every session runs in passive mode and stores files as binary.

use std::io::Read;

use suppaftp::types::{FileType, Mode};
use suppaftp::{FtpError, FtpStream};
use tracing::trace;

use crate::domain::policies::is_already_exists_message;
use crate::domain::ports::{FtpConnection, FtpConnector, TransportError};
use crate::domain::value_objects::{HostAddress, Protocol};

fn transport_error(e: FtpError) -> TransportError {
    TransportError::other(e.to_string())
}

/// Opens passive-mode control connections
#[derive(Debug, Clone, Copy, Default)]
pub struct SuppaFtpConnector;

impl FtpConnector for SuppaFtpConnector {
    type Connection = SuppaFtpConnection;

    fn connect(&self, host: &HostAddress) -> Result<Self::Connection, TransportError> {
        let addr = host.socket_addr(Protocol::Ftp.default_port());
        trace!(addr = %addr, "ftp connect");
        let mut stream = FtpStream::connect(addr.as_str()).map_err(transport_error)?;
        stream.set_mode(Mode::Passive);
        Ok(SuppaFtpConnection { stream })
    }
}

/// A live `suppaftp` control connection
pub struct SuppaFtpConnection {
    stream: FtpStream,
}

impl FtpConnection for SuppaFtpConnection {
    fn login(&mut self, username: &str, password: &str) -> Result<(), TransportError> {
        self.stream
            .login(username, password)
            .map_err(transport_error)
    }

    fn binary_mode(&mut self) -> Result<(), TransportError> {
        self.stream
            .transfer_type(FileType::Binary)
            .map_err(transport_error)
    }

    fn mkdir(&mut self, path: &str) -> Result<(), TransportError> {
        self.stream.mkdir(path).map_err(|e| {
            let message = e.to_string();
            if is_already_exists_message(&message) {
                TransportError::already_exists(message)
            } else {
                TransportError::other(message)
            }
        })
    }

    fn cwd(&mut self, path: &str) -> Result<(), TransportError> {
        self.stream.cwd(path).map_err(transport_error)
    }

    fn put_binary(
        &mut self,
        remote_name: &str,
        mut reader: &mut dyn Read,
    ) -> Result<u64, TransportError> {
        self.stream
            .put_file(remote_name, &mut reader)
            .map_err(transport_error)
    }

    fn close(&mut self) -> Result<(), TransportError> {
        self.stream.quit().map_err(transport_error)
    }
}
