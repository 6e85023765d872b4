//! Zip bundle extractor
//!
//! An `.ipa` is a plain zip archive with the app under `Payload/`.

use std::fs::File;
use std::path::Path;

use crate::domain::ports::{BundleExtractor, ExtractError};

/// Unpacks packages with the `zip` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipBundleExtractor;

impl BundleExtractor for ZipBundleExtractor {
    fn extract(&self, package: &Path, dest: &Path) -> Result<(), ExtractError> {
        let archive_error = |e: zip::result::ZipError| ExtractError::Archive {
            path: package.display().to_string(),
            message: e.to_string(),
        };
        let file = File::open(package)?;
        let mut archive = zip::ZipArchive::new(file).map_err(archive_error)?;
        archive.extract(dest).map_err(archive_error)
    }
}
