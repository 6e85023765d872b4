//! Protocol value object - which transport an upload goes through

use serde::{Deserialize, Serialize};

use crate::error::ShipError;

/// Transfer protocol
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain FTP in passive mode
    #[default]
    Ftp,
    /// SFTP over an SSH session
    Sftp,
}

impl Protocol {
    /// Port used when the host string does not carry one
    pub fn default_port(&self) -> u16 {
        match self {
            Protocol::Ftp => 21,
            Protocol::Sftp => 22,
        }
    }

    /// Lowercase name, as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Ftp => "ftp",
            Protocol::Sftp => "sftp",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

impl std::str::FromStr for Protocol {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ftp" => Ok(Protocol::Ftp),
            "sftp" => Ok(Protocol::Sftp),
            other => Err(ShipError::UnknownProtocol(other.to_string())),
        }
    }
}
