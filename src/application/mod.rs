//! Application Layer
//!
//! Use cases that orchestrate an upload.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT talk to sockets or archives directly
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PathExpander` - Resolves `{Key}` placeholders from the package's Info.plist
//! - `FtpUploader` - connect, login, mkdir -p, cwd, store, close
//! - `SftpUploader` - open session, ensure dir, upload, shut down

pub mod expand;
pub mod upload;

pub use expand::PathExpander;
pub use upload::{FtpUploader, SftpUploader};
