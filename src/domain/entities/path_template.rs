//! Destination path template
//!
//! A template is a remote path with `{Key}` placeholders, e.g.
//! `/releases/{CFBundleShortVersionString}/{CFBundleVersion}/`.

use std::fmt;

/// A `{Key}` occurrence in a template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceholderToken {
    key: String,
}

impl PlaceholderToken {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The key between the braces
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The token as it appears in the template, braces included
    pub fn literal(&self) -> String {
        format!("{{{}}}", self.key)
    }
}

impl fmt::Display for PlaceholderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.key)
    }
}

/// Destination path template
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathTemplate(String);

impl PathTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Distinct tokens in first-appearance order
    ///
    /// A token is `{` followed by one or more characters other than `{` and
    /// `}`, then `}`. Unbalanced braces are left alone.
    pub fn tokens(&self) -> Vec<PlaceholderToken> {
        let mut tokens: Vec<PlaceholderToken> = Vec::new();
        let mut rest = self.0.as_str();

        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(len) = after.find(['{', '}']) else {
                break;
            };
            if after.as_bytes()[len] == b'}' && len > 0 {
                let token = PlaceholderToken::new(&after[..len]);
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
                rest = &after[len + 1..];
            } else {
                // `{}` or a nested `{`: restart the scan at the next brace
                rest = &after[len..];
            }
        }

        tokens
    }

    /// Replace every occurrence of `token` with `value`
    pub fn substitute(&mut self, token: &PlaceholderToken, value: &str) {
        self.0 = self.0.replace(&token.literal(), value);
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
