//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating uploaders with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates uploaders with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use ipa_ship::presentation::factory;
//!
//! let uploader = factory::create_uploader(Protocol::Ftp, credentials);
//! let report = uploader.upload(&request)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, DistributeArgs};
pub use factory::{create_path_expander, create_uploader};
