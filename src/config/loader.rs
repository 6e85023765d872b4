//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::Protocol;
use crate::error::{ShipError, ShipResult};

use super::types::Config;

/// Project config file, relative to the working directory
pub const PROJECT_CONFIG_FILE: &str = ".ipa-ship.toml";

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "IPA_SHIP_";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShipResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShipError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// The first file that exists and parses wins; files are not merged. A file
/// that fails to parse is skipped with a warning.
pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let project = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let user = user_config_path();

    for candidate in [project, user].into_iter().flatten() {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                debug!(file = %candidate.display(), "loaded config");
                return (with_env_overrides(config), warnings);
            }
            Err(e) => warn!(error = %e, "ignoring config file"),
        }
    }

    (with_env_overrides(Config::default()), Vec::new())
}

/// Path of the user config file (`$XDG_CONFIG_HOME/ipa-ship/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("ipa-ship").join("config.toml"))
}

/// Apply environment variable overrides (IPA_SHIP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    let var = |name: &str| {
        get_env(&format!("{}{}", ENV_PREFIX, name)).filter(|v| !v.trim().is_empty())
    };

    // IPA_SHIP_HOST
    if let Some(host) = var("HOST") {
        config.distribute.host = Some(host);
    }

    // IPA_SHIP_USER
    if let Some(user) = var("USER") {
        config.distribute.user = Some(user);
    }

    // IPA_SHIP_PATH
    if let Some(path) = var("PATH") {
        config.distribute.path = Some(path);
    }

    // IPA_SHIP_PROTOCOL
    if let Some(protocol) = var("PROTOCOL") {
        match protocol.parse::<Protocol>() {
            Ok(p) => config.distribute.protocol = Some(p),
            Err(e) => warn!(error = %e, "ignoring {}PROTOCOL", ENV_PREFIX),
        }
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "distribute",
        "host",
        "user",
        "path",
        "protocol",
        "mkdir",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
