//! Domain Policies
//!
//! Business rules that govern behavior. Pure functions only.

mod directory_policy;

pub use directory_policy::is_already_exists_message;
