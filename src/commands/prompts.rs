//! Input discovery and interactive prompts
//!
//! Every `determine_*` helper takes the explicit value first, then looks in
//! the working directory, then asks. Prompts only happen when the
//! [`Prompter`] is interactive; otherwise the value stays missing and the
//! caller reports it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::{Input, Password, Select};

use crate::ui::context::UiContext;
use crate::ui::theme::prompt_theme;

pub const PACKAGE_SUFFIX: &str = ".ipa";
pub const SYMBOL_ARCHIVE_SUFFIX: &str = ".dSYM.zip";

/// Asks the user for missing values, or declines when not interactive
pub struct Prompter {
    interactive: bool,
    color: bool,
}

impl Prompter {
    pub fn new(ui: &UiContext) -> Self {
        Self {
            interactive: ui.interactive,
            color: ui.color,
        }
    }

    #[cfg(test)]
    pub fn non_interactive() -> Self {
        Self {
            interactive: false,
            color: false,
        }
    }

    pub fn choose(&self, prompt: &str, candidates: &[PathBuf]) -> Result<Option<PathBuf>> {
        if !self.interactive {
            return Ok(None);
        }
        let names: Vec<String> = candidates.iter().map(|p| display_name(p)).collect();
        let theme = prompt_theme(self.color);
        let picked = Select::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .items(&names)
            .default(0)
            .interact_opt()?;
        Ok(picked.and_then(|i| candidates.get(i).cloned()))
    }

    pub fn ask(&self, prompt: &str) -> Result<Option<String>> {
        if !self.interactive {
            return Ok(None);
        }
        let theme = prompt_theme(self.color);
        let answer: String = Input::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(non_blank(Some(answer)))
    }

    pub fn ask_password(&self, prompt: &str) -> Result<Option<String>> {
        if !self.interactive {
            return Ok(None);
        }
        let theme = prompt_theme(self.color);
        let answer = Password::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }
}

/// Files in `dir` whose name ends with `suffix` (ASCII case-insensitive), sorted
pub fn discover(dir: &Path, suffix: &str) -> Vec<PathBuf> {
    let suffix = suffix.to_ascii_lowercase();
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut found: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().to_ascii_lowercase().ends_with(&suffix))
                .unwrap_or(false)
        })
        .collect();
    found.sort();
    found
}

/// The `.ipa` to upload: flag, single match in `cwd`, selection, then a path prompt
pub fn determine_file(
    explicit: Option<&Path>,
    cwd: &Path,
    prompter: &Prompter,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        return Ok(Some(path.to_path_buf()));
    }
    let candidates = discover(cwd, PACKAGE_SUFFIX);
    match candidates.len() {
        0 => Ok(prompter.ask("File")?.map(PathBuf::from)),
        1 => Ok(candidates.into_iter().next()),
        _ => prompter.choose("Select the .ipa file", &candidates),
    }
}

/// The zipped dSYM: flag, single match in `cwd`, or a selection
pub fn determine_dsym(
    explicit: Option<&Path>,
    cwd: &Path,
    prompter: &Prompter,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        return Ok(Some(path.to_path_buf()));
    }
    let candidates = discover(cwd, SYMBOL_ARCHIVE_SUFFIX);
    match candidates.len() {
        0 => Ok(None),
        1 => Ok(candidates.into_iter().next()),
        _ => prompter.choose("Select the dSYM.zip file", &candidates),
    }
}

/// First non-blank value, else the prompt's answer
pub fn determine_value(
    explicit: Option<String>,
    fallback: Option<String>,
    prompter: &Prompter,
    prompt: &str,
) -> Result<Option<String>> {
    match non_blank(explicit).or_else(|| non_blank(fallback)) {
        Some(v) => Ok(Some(v)),
        None => prompter.ask(prompt),
    }
}

/// Like [`determine_value`] with a hidden prompt
pub fn determine_password(
    explicit: Option<String>,
    fallback: Option<String>,
    prompter: &Prompter,
) -> Result<Option<String>> {
    let given = |v: Option<String>| v.filter(|v| !v.is_empty());
    match given(explicit).or_else(|| given(fallback)) {
        Some(v) => Ok(Some(v)),
        None => prompter.ask_password("Password"),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
