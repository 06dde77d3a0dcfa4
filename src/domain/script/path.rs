use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::identifiers::validate_home_relative_path;

/// A validated path relative to `$HOME`.
///
/// Segments are restricted to `[A-Za-z0-9._-]`, so the rendered form
/// `"$HOME/<path>"` never needs further quoting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HomePath(String);

impl HomePath {
    pub fn new(path: &str) -> Result<Self, AppError> {
        let trimmed = path.strip_prefix("~/").unwrap_or(path);
        if validate_home_relative_path(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(AppError::config_error(format!(
                "Invalid home-relative path '{path}': use segments of letters, digits, '.', '-' or '_'"
            )))
        }
    }

    /// Built-in defaults that are known to be valid.
    pub(crate) fn from_static(path: &'static str) -> Self {
        debug_assert!(validate_home_relative_path(path));
        Self(path.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a validated child segment.
    pub fn join(&self, child: &str) -> Result<Self, AppError> {
        Self::new(&format!("{}/{}", self.0, child))
    }

    /// Shell expression for this path.
    pub fn to_shell(&self) -> String {
        format!("\"$HOME/{}\"", self.0)
    }
}

/// Displays as `~/<path>`.
impl fmt::Display for HomePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~/{}", self.0)
    }
}

impl TryFrom<String> for HomePath {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<HomePath> for String {
    fn from(value: HomePath) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_tilde_prefix() {
        let path = HomePath::new("~/.zshrc").unwrap();
        assert_eq!(path.as_str(), ".zshrc");
        assert_eq!(path.to_shell(), "\"$HOME/.zshrc\"");
        assert_eq!(path.to_string(), "~/.zshrc");
    }

    #[test]
    fn rejects_escape_attempts() {
        assert!(HomePath::new("../.zshrc").is_err());
        assert!(HomePath::new("/etc/zshrc").is_err());
        assert!(HomePath::new(".zshrc\"; rm -rf ~; \"").is_err());
    }

    #[test]
    fn join_validates_child() {
        let ssh = HomePath::new(".ssh").unwrap();
        assert_eq!(ssh.join("config").unwrap().as_str(), ".ssh/config");
        assert!(ssh.join("..").is_err());
    }
}
