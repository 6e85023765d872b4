//! Remote directory value object
//!
//! Server paths are always `/`-separated strings, independent of the local
//! platform, so this does not go through `std::path`.

use std::fmt;

/// A resolved destination directory on the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RemoteDir(String);

impl RemoteDir {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }

    /// Non-empty path components
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|c| !c.is_empty())
    }

    /// Every ancestor-or-self directory, shortest first
    ///
    /// `/a/b/c` yields `/a`, `/a/b`, `/a/b/c`; `a/b` yields `a`, `a/b`.
    pub fn prefixes(&self) -> Vec<String> {
        let mut acc = String::new();
        let mut out = Vec::new();
        for component in self.components() {
            if !acc.is_empty() || self.is_absolute() {
                acc.push('/');
            }
            acc.push_str(component);
            out.push(acc.clone());
        }
        out
    }

    /// Directory to change into: trailing slashes dropped, `/` kept as is
    pub fn working_dir(&self) -> String {
        let trimmed = self.0.trim_end_matches('/');
        if trimmed.is_empty() && self.is_absolute() {
            "/".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Remote path of a file named `name` inside this directory
    ///
    /// An empty directory joins like `/`, giving `/<name>`.
    pub fn join(&self, name: &str) -> String {
        if self.0.is_empty() {
            return format!("/{}", name);
        }
        let base = self.working_dir();
        if base.ends_with('/') {
            format!("{}{}", base, name)
        } else {
            format!("{}/{}", base, name)
        }
    }
}

impl fmt::Display for RemoteDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RemoteDir {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_of_absolute_path() {
        let dir = RemoteDir::new("/a/b/c");
        assert_eq!(dir.prefixes(), vec!["/a", "/a/b", "/a/b/c"]);
    }

    #[test]
    fn prefixes_skip_empty_components() {
        let dir = RemoteDir::new("/releases//1.2.3/");
        assert_eq!(dir.prefixes(), vec!["/releases", "/releases/1.2.3"]);
    }

    #[test]
    fn prefixes_of_relative_path() {
        let dir = RemoteDir::new("builds/nightly");
        assert_eq!(dir.prefixes(), vec!["builds", "builds/nightly"]);
    }

    #[test]
    fn prefixes_of_empty_and_root() {
        assert!(RemoteDir::new("").prefixes().is_empty());
        assert!(RemoteDir::new("/").prefixes().is_empty());
    }

    #[test]
    fn working_dir_trims_trailing_slash() {
        assert_eq!(RemoteDir::new("/releases/1.2.3/").working_dir(), "/releases/1.2.3");
        assert_eq!(RemoteDir::new("/").working_dir(), "/");
        assert_eq!(RemoteDir::new("").working_dir(), "");
    }

    #[test]
    fn join_places_file_inside_directory() {
        assert_eq!(
            RemoteDir::new("/releases/1.2.3/").join("app.ipa"),
            "/releases/1.2.3/app.ipa"
        );
        assert_eq!(RemoteDir::new("/").join("app.ipa"), "/app.ipa");
    }

    #[test]
    fn join_on_empty_directory_is_rooted() {
        assert_eq!(RemoteDir::new("").join("app.ipa"), "/app.ipa");
        assert_eq!(RemoteDir::default().join("app.dSYM.zip"), "/app.dSYM.zip");
    }
}
