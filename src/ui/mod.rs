//! Terminal output for the `ipa` binary
//!
//! - `terminal` / `context` - capability detection and output settings
//! - `theme`, `primitives` - design tokens, icons, colored text
//! - `blocks`, `views` - rendered sections of command output
//! - `json` - NDJSON events for `--json`

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
