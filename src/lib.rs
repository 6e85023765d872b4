//! ipa-ship - upload iOS builds over FTP and SFTP
//!
//! Uploads an `.ipa` package and an optional zipped dSYM to a server. The
//! destination path may contain `{Key}` placeholders that are filled in from
//! the app's `Info.plist`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{PathTemplate, UploadReport, UploadRequest};
pub use domain::ports::{UploadError, Uploader};
pub use domain::value_objects::{Credentials, HostAddress, Protocol, RemoteDir};
pub use error::{ShipError, ShipResult};
