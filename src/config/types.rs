//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Protocol;
use crate::error::ShipResult;

use super::loader::{self, ConfigWarning};

/// Upload defaults (`[distribute]`)
///
/// No password field: secrets come from flags, the environment or a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributeConfig {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub user: Option<String>,

    /// Destination template, may contain `{Key}` placeholders
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub protocol: Option<Protocol>,

    #[serde(default = "default_true")]
    pub mkdir: bool,
}

impl Default for DistributeConfig {
    fn default() -> Self {
        Self {
            host: None,
            user: None,
            path: None,
            protocol: None,
            mkdir: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration (`[output]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub distribute: DistributeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ShipResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> ShipResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project config, then user config, then defaults; env on top
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root).0
    }

    /// Like [`Config::load_or_default`], keeping the warnings of the file used
    pub fn load_or_default_with_warnings(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply `IPA_SHIP_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
