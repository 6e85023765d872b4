//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod bundle;
pub mod transport;
pub mod uploader;

pub use bundle::{BundleExtractor, ExtractError, PropertyListReader};
pub use transport::{
    FtpConnection, FtpConnector, SftpConnector, SftpSession, TransportError, TransportErrorKind,
};
pub use uploader::{UploadError, Uploader};
