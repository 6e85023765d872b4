//! Package metadata adapters

mod plist_reader;
mod zip_extractor;

pub use plist_reader::{lookup, printable, PlistFileReader};
pub use zip_extractor::ZipBundleExtractor;
