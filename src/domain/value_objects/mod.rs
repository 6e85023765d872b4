//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod credentials;
mod host;
mod protocol;
mod remote_dir;

pub use credentials::Credentials;
pub use host::HostAddress;
pub use protocol::Protocol;
pub use remote_dir::RemoteDir;
