//! Common test utilities for `ipa` integration tests.
//!
//! - `TestEnv`: isolated working directory and home, runs the binary
//! - Fixtures: `.ipa` builder and a scripted FTP server

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
