//! Installable tool domain model.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated catalog tool identifier.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - No path traversal components (/, \\, .., etc.)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolId(String);

impl_validated_id!(ToolId, true, AppError::InvalidToolId);

/// Catalog grouping, mirroring the configurator steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCategory {
    Applications,
    PackageManagers,
    Devops,
    CliTools,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::Applications,
        ToolCategory::PackageManagers,
        ToolCategory::Devops,
        ToolCategory::CliTools,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolCategory::Applications => "applications",
            ToolCategory::PackageManagers => "package-managers",
            ToolCategory::Devops => "devops",
            ToolCategory::CliTools => "cli-tools",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ToolCategory::Applications => "Applications",
            ToolCategory::PackageManagers => "Runtimes",
            ToolCategory::Devops => "Infrastructure",
            ToolCategory::CliTools => "CLI Tools",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a tool gets installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolType {
    /// Homebrew formula (command-line package).
    Brew,
    /// Homebrew cask (GUI application).
    BrewCask,
    /// Mac App Store app installed through `mas`.
    Mas,
    /// Global npm package.
    Npm,
    /// Caller-authored install command.
    Custom,
}

impl ToolType {
    /// Section order in generated scripts.
    pub const ALL: [ToolType; 5] =
        [ToolType::Brew, ToolType::BrewCask, ToolType::Mas, ToolType::Npm, ToolType::Custom];

    /// Canonical command prefix stripped to obtain the install target.
    fn command_prefix(self) -> Option<&'static str> {
        match self {
            ToolType::Brew => Some("brew install "),
            ToolType::BrewCask => Some("brew install --cask "),
            ToolType::Mas => Some("mas install "),
            ToolType::Npm => Some("npm install -g "),
            ToolType::Custom => None,
        }
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: ToolId,
    pub name: String,
    pub category: ToolCategory,
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub install_command: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub popular: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dev_pick: bool,
    #[serde(default, alias = "url", skip_serializing_if = "Option::is_none")]
    pub homepage: Option<Url>,
}

impl Tool {
    /// Package, cask, app id or npm package this tool installs.
    ///
    /// Strips the canonical prefix for the tool type; when the command does not
    /// carry that prefix the whole trimmed command is the target.
    pub fn install_target(&self) -> &str {
        let command = self.install_command.trim();
        match self.tool_type.command_prefix() {
            Some(prefix) => command.strip_prefix(prefix).map(str::trim).unwrap_or(command),
            None => command,
        }
    }

    /// The install target when it is a single word. Commands with extra
    /// arguments, pipes or several packages have to run verbatim.
    pub fn canonical_target(&self) -> Option<&str> {
        self.tool_type.command_prefix()?;
        let target = self.install_target();
        (!target.is_empty() && !target.contains(char::is_whitespace)).then_some(target)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub(crate) fn tool(id: &str, name: &str, tool_type: ToolType, command: &str) -> Tool {
        Tool {
            id: ToolId::new(id).unwrap(),
            name: name.to_string(),
            category: ToolCategory::CliTools,
            tool_type,
            install_command: command.to_string(),
            description: String::new(),
            icon: None,
            popular: false,
            dev_pick: false,
            homepage: None,
        }
    }
}
