//! Credentials value object

use std::fmt;

use super::HostAddress;

/// Host, user name and secret for one upload
///
/// Passed by value into an uploader. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: HostAddress,
    pub username: String,
    secret: String,
}

impl Credentials {
    pub fn new(host: HostAddress, username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            host,
            username: username.into(),
            secret: secret.into(),
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}
