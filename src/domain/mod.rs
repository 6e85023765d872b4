//! Domain Layer
//!
//! Upload concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - UploadRequest, PathTemplate, UploadReport
//! - `value_objects/` - Protocol, HostAddress, Credentials, RemoteDir
//! - `policies/` - Business rules (directory "already exists" detection)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
