//! Bundle ports - reading metadata out of a packaged app
//!
//! The path expander unpacks the package with a [`BundleExtractor`] and then
//! asks a [`PropertyListReader`] for individual keys.

use std::path::Path;

use thiserror::Error;

/// Failure while unpacking a package
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid archive {path}: {message}")]
    Archive { path: String, message: String },
}

/// Unpacks a package archive into a directory
pub trait BundleExtractor {
    /// Extract every entry of `package` below `dest`
    fn extract(&self, package: &Path, dest: &Path) -> Result<(), ExtractError>;
}

/// Reads single values from a property-list file
pub trait PropertyListReader {
    /// Printable value for `key`, or `None` if the key is absent, the value is
    /// not printable, or the file cannot be read
    fn value(&self, plist: &Path, key: &str) -> Option<String>;
}
