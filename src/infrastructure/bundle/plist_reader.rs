//! Property list reader
//!
//! Reads XML or binary plists with the `plist` crate. Keys follow the
//! PlistBuddy convention: `:` separates nested dictionary keys and array
//! indices, so `CFBundleIcons:CFBundlePrimaryIcon:CFBundleIconFiles:0` walks
//! three dictionaries and one array.

use std::path::Path;

use plist::Value;
use tracing::debug;

use crate::domain::ports::PropertyListReader;

const KEY_SEPARATOR: char = ':';

/// Reads printable values out of `Info.plist` files
#[derive(Debug, Clone, Copy, Default)]
pub struct PlistFileReader;

impl PropertyListReader for PlistFileReader {
    fn value(&self, plist: &Path, key: &str) -> Option<String> {
        let root = match Value::from_file(plist) {
            Ok(v) => v,
            Err(e) => {
                debug!(plist = %plist.display(), error = %e, "unreadable property list");
                return None;
            }
        };
        lookup(&root, key).and_then(printable)
    }
}

/// Walk `key` through nested dictionaries and arrays
pub fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split(KEY_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .try_fold(root, |node, segment| match node {
            Value::Dictionary(dict) => dict.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

/// Text form of a scalar value; containers and raw data have none
pub fn printable(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(r) => Some(r.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Date(d) => Some(d.to_xml_format()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plist::Dictionary;
    use tempfile::tempdir;

    fn info_plist() -> Value {
        let mut icon = Dictionary::new();
        icon.insert("CFBundleIconName".into(), Value::String("AppIcon".into()));
        icon.insert(
            "CFBundleIconFiles".into(),
            Value::Array(vec![Value::String("AppIcon60x60".into())]),
        );
        let mut icons = Dictionary::new();
        icons.insert("CFBundlePrimaryIcon".into(), Value::Dictionary(icon));

        let mut root = Dictionary::new();
        root.insert("CFBundleVersion".into(), Value::String("1.2.3".into()));
        root.insert("BuildNumber".into(), Value::Integer(42i64.into()));
        root.insert("Beta".into(), Value::Boolean(true));
        root.insert("CFBundleIcons".into(), Value::Dictionary(icons));
        Value::Dictionary(root)
    }

    #[test]
    fn top_level_string() {
        let root = info_plist();
        assert_eq!(
            lookup(&root, "CFBundleVersion").and_then(printable),
            Some("1.2.3".to_string())
        );
    }

    #[test]
    fn scalars_are_printable() {
        let root = info_plist();
        assert_eq!(
            lookup(&root, "BuildNumber").and_then(printable),
            Some("42".to_string())
        );
        assert_eq!(
            lookup(&root, "Beta").and_then(printable),
            Some("true".to_string())
        );
    }

    #[test]
    fn nested_keys_and_indices() {
        let root = info_plist();
        assert_eq!(
            lookup(&root, "CFBundleIcons:CFBundlePrimaryIcon:CFBundleIconName").and_then(printable),
            Some("AppIcon".to_string())
        );
        assert_eq!(
            lookup(&root, "CFBundleIcons:CFBundlePrimaryIcon:CFBundleIconFiles:0")
                .and_then(printable),
            Some("AppIcon60x60".to_string())
        );
        assert!(lookup(&root, "CFBundleIcons:CFBundlePrimaryIcon:CFBundleIconFiles:9").is_none());
    }

    #[test]
    fn containers_are_not_printable() {
        let root = info_plist();
        assert!(lookup(&root, "CFBundleIcons").and_then(printable).is_none());
    }

    #[test]
    fn reads_xml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Info.plist");
        info_plist().to_file_xml(&path).unwrap();

        assert_eq!(
            PlistFileReader.value(&path, "CFBundleVersion"),
            Some("1.2.3".to_string())
        );
        assert_eq!(PlistFileReader.value(&path, "CFBundleMissing"), None);
    }

    #[test]
    fn reads_binary_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Info.plist");
        info_plist().to_file_binary(&path).unwrap();

        assert_eq!(
            PlistFileReader.value(&path, "CFBundleVersion"),
            Some("1.2.3".to_string())
        );
    }

    #[test]
    fn unreadable_file_has_no_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Info.plist");
        std::fs::write(&path, "garbage").unwrap();

        assert_eq!(PlistFileReader.value(&path, "CFBundleVersion"), None);
    }
}
