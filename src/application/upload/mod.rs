//! Upload Module
//!
//! - `FtpUploader` - plain FTP, directory tree created one level at a time
//! - `SftpUploader` - SFTP over SSH, destination ensured in one call
//!
//! Both resolve the destination with a [`PathExpander`](crate::application::expand::PathExpander)
//! and implement the [`Uploader`](crate::domain::ports::Uploader) port.

mod ftp_uploader;
mod sftp_uploader;

pub use ftp_uploader::FtpUploader;
pub use sftp_uploader::SftpUploader;
