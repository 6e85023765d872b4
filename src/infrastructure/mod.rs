//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `bundle/` - Package extraction (zip) and Info.plist reading (plist)
//! - `transport/` - FTP (suppaftp) and SFTP (ssh2) connections

pub mod bundle;
pub mod transport;

// Re-export for convenience
pub use bundle::{PlistFileReader, ZipBundleExtractor};
pub use transport::{Ssh2Connector, SuppaFtpConnector};
