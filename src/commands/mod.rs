//! Command implementations for the `ipa` binary

pub mod distribute;
pub mod prompts;
