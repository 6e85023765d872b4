//! Network transports for the upload ports

mod ftp;
mod sftp;

pub use ftp::{SuppaFtpConnection, SuppaFtpConnector};
pub use sftp::{Ssh2Connector, Ssh2Session};
