//! Path Expander
//!
//! Resolves `{Key}` placeholders in a destination template against the
//! `Info.plist` of the app bundle inside a package:
//! 1. Collect the distinct tokens (no tokens: return the template untouched)
//! 2. Unpack the package into a scratch directory
//! 3. Find `**/*.app/Info.plist` (last match in sorted order)
//! 4. Look each key up once and substitute every occurrence
//!
//! Failures in steps 2-4 are not errors: the affected tokens simply stay in
//! the path as literal `{Key}` text.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, trace, warn};

use crate::domain::entities::PathTemplate;
use crate::domain::ports::{BundleExtractor, PropertyListReader};
use crate::domain::value_objects::RemoteDir;

const SCRATCH_PREFIX: &str = "ipa-ship-";
const INFO_PLIST: &str = "Info.plist";
const APP_BUNDLE_SUFFIX: &str = ".app";

/// Expands destination templates using package metadata
pub struct PathExpander {
    extractor: Box<dyn BundleExtractor>,
    reader: Box<dyn PropertyListReader>,
    scratch_root: Option<PathBuf>,
}

impl PathExpander {
    pub fn new(extractor: Box<dyn BundleExtractor>, reader: Box<dyn PropertyListReader>) -> Self {
        Self {
            extractor,
            reader,
            scratch_root: None,
        }
    }

    /// Create scratch directories under `root` instead of the system temp dir
    pub fn with_scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = Some(root.into());
        self
    }

    /// Resolve `template` against the metadata of `package`
    pub fn expand(&self, package: &Path, template: &PathTemplate) -> RemoteDir {
        let tokens = template.tokens();
        if tokens.is_empty() {
            return RemoteDir::new(template.as_str());
        }

        let builder = {
            let mut b = tempfile::Builder::new();
            b.prefix(SCRATCH_PREFIX);
            b
        };
        let scratch = match &self.scratch_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        };
        let scratch = match scratch {
            Ok(dir) => dir,
            Err(e) => {
                debug!(error = %e, "could not create scratch directory, leaving placeholders");
                return RemoteDir::new(template.as_str());
            }
        };

        if let Err(e) = self.extractor.extract(package, scratch.path()) {
            debug!(package = %package.display(), error = %e, "package extraction failed");
        }

        let mut resolved = template.clone();
        match find_info_plist(scratch.path()) {
            Some(plist) => {
                debug!(plist = %plist.display(), "resolving placeholders");
                for token in &tokens {
                    match self.reader.value(&plist, token.key()) {
                        Some(value) => {
                            trace!(key = token.key(), value = %value, "placeholder resolved");
                            resolved.substitute(token, &value);
                        }
                        None => trace!(key = token.key(), "no value for placeholder"),
                    }
                }
            }
            None => debug!(package = %package.display(), "no app Info.plist found in package"),
        }

        let scratch_path = scratch.path().to_path_buf();
        if let Err(e) = scratch.close() {
            warn!(path = %scratch_path.display(), error = %e, "could not remove scratch directory");
        }

        RemoteDir::from(resolved.into_string())
    }
}

/// Last `*.app/Info.plist` below `root`, in sorted path order
pub fn find_info_plist(root: &Path) -> Option<PathBuf> {
    let mut matches: Vec<PathBuf> = WalkBuilder::new(root)
        .standard_filters(false)
        .build()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| is_app_info_plist(path))
        .collect();
    matches.sort();
    matches.pop()
}

fn is_app_info_plist(path: &Path) -> bool {
    let is_info = path.file_name().is_some_and(|n| n == INFO_PLIST);
    let in_app = path
        .parent()
        .and_then(|p| p.file_name())
        .is_some_and(|n| n.to_string_lossy().ends_with(APP_BUNDLE_SUFFIX));
    is_info && in_app
}
