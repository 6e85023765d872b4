//! Destination path expansion
//!
//! ```ignore
//! use ipa_ship::application::expand::PathExpander;
//!
//! let expander = PathExpander::new(Box::new(ZipBundleExtractor), Box::new(PlistFileReader));
//! let dir = expander.expand(Path::new("app.ipa"), &PathTemplate::new("/builds/{CFBundleVersion}"));
//! ```

mod path_expander;

pub use path_expander::{find_info_plist, PathExpander};
