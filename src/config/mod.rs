//! Configuration module for ipa-ship
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (IPA_SHIP_*)
//! 3. Project config (./.ipa-ship.toml)
//! 4. User config (~/.config/ipa-ship/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! The password is never part of the configuration.

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, ENV_PREFIX, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, DistributeConfig, OutputConfig};
