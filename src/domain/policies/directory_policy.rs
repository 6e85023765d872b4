//! Directory creation policy
//!
//! FTP servers report "directory already exists" as a plain 550 reply with
//! free-form text, so the only signal is the wording. Every check of that
//! wording goes through [`is_already_exists_message`].
//!
//! Known limitation: servers with localized or unusual replies are not
//! recognized and their "exists" failures abort the upload.

const ALREADY_EXISTS_PATTERNS: &[&str] = &["file exists", "already exists", "directory exists"];

/// Whether a directory-creation failure message means the directory is
/// already there
pub fn is_already_exists_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    ALREADY_EXISTS_PATTERNS.iter().any(|p| lower.contains(p))
}
