//! Upload request - what one invocation uploads and where

use std::path::{Path, PathBuf};

use super::PathTemplate;

/// Files and destination for a single upload
///
/// Built once by the command layer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    package_path: PathBuf,
    symbol_archive_path: Option<PathBuf>,
    destination: PathTemplate,
    create_directories: bool,
}

impl UploadRequest {
    /// New request for `package_path` with an empty destination and
    /// directory creation enabled
    pub fn new(package_path: impl Into<PathBuf>) -> Self {
        Self {
            package_path: package_path.into(),
            symbol_archive_path: None,
            destination: PathTemplate::default(),
            create_directories: true,
        }
    }

    pub fn with_symbol_archive(mut self, path: Option<PathBuf>) -> Self {
        self.symbol_archive_path = path;
        self
    }

    pub fn with_destination(mut self, template: impl Into<String>) -> Self {
        self.destination = PathTemplate::new(template);
        self
    }

    pub fn with_create_directories(mut self, enabled: bool) -> Self {
        self.create_directories = enabled;
        self
    }

    pub fn package_path(&self) -> &Path {
        &self.package_path
    }

    pub fn symbol_archive_path(&self) -> Option<&Path> {
        self.symbol_archive_path.as_deref()
    }

    pub fn destination(&self) -> &PathTemplate {
        &self.destination
    }

    pub fn create_directories(&self) -> bool {
        self.create_directories
    }

    /// Package first, then the symbol archive if any
    pub fn files(&self) -> Vec<&Path> {
        let mut files = vec![self.package_path.as_path()];
        if let Some(dsym) = &self.symbol_archive_path {
            files.push(dsym.as_path());
        }
        files
    }
}

/// Base file name used as the remote name
///
/// Falls back to the whole path when it has no file name component.
pub fn remote_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let request = UploadRequest::new("build/app.ipa");
        assert!(request.create_directories());
        assert!(request.symbol_archive_path().is_none());
        assert_eq!(request.destination().as_str(), "");
        assert_eq!(request.files(), vec![Path::new("build/app.ipa")]);
    }

    #[test]
    fn files_lists_symbol_archive_after_package() {
        let request = UploadRequest::new("app.ipa")
            .with_symbol_archive(Some(PathBuf::from("app.dSYM.zip")))
            .with_destination("/releases/")
            .with_create_directories(false);
        assert_eq!(
            request.files(),
            vec![Path::new("app.ipa"), Path::new("app.dSYM.zip")]
        );
        assert!(!request.create_directories());
        assert_eq!(request.destination().as_str(), "/releases/");
    }

    #[test]
    fn remote_file_name_is_base_name() {
        assert_eq!(remote_file_name(Path::new("/tmp/build/app.ipa")), "app.ipa");
        assert_eq!(remote_file_name(Path::new("app.dSYM.zip")), "app.dSYM.zip");
    }
}
