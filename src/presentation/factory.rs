//! Uploader Factory
//!
//! Creates uploaders with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{FtpUploader, PathExpander, SftpUploader};
use crate::domain::ports::Uploader;
use crate::domain::value_objects::{Credentials, Protocol};
use crate::infrastructure::{PlistFileReader, Ssh2Connector, SuppaFtpConnector, ZipBundleExtractor};

/// Concrete FTP uploader
pub type ConcreteFtpUploader = FtpUploader<SuppaFtpConnector>;

/// Concrete SFTP uploader
pub type ConcreteSftpUploader = SftpUploader<Ssh2Connector>;

/// Path expander reading `.ipa` archives and their Info.plist
pub fn create_path_expander() -> PathExpander {
    PathExpander::new(Box::new(ZipBundleExtractor), Box::new(PlistFileReader))
}

/// Create the uploader for `protocol`
pub fn create_uploader(protocol: Protocol, credentials: Credentials) -> Box<dyn Uploader> {
    let expander = create_path_expander();
    match protocol {
        Protocol::Ftp => Box::new(ConcreteFtpUploader::new(
            credentials,
            SuppaFtpConnector,
            expander,
        )),
        Protocol::Sftp => Box::new(ConcreteSftpUploader::new(
            credentials,
            Ssh2Connector,
            expander,
        )),
    }
}
