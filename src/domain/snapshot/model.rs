//! Typed shape of a scanned machine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which input format a snapshot was decoded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SnapshotFormat {
    #[default]
    Json,
    /// `## SECTION ##` delimited text produced by old scan scripts.
    LegacyText,
}

/// A validated scan result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub meta: SnapshotMeta,
    pub package_managers: PackageManagers,
    pub applications: Vec<String>,
    pub development: Development,
    pub terminal: Terminal,
    pub languages: Languages,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub cloud: Map<String, Value>,
    #[serde(skip)]
    pub format: SnapshotFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMeta {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    pub hostname: String,
    pub os_version: String,
    pub arch: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManagers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homebrew: Option<Homebrew>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homebrew {
    #[serde(default)]
    pub formulae: Vec<String>,
    #[serde(default)]
    pub casks: Vec<String>,
    #[serde(default)]
    pub taps: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Development {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vscode: Option<VsCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VsCode {
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keybindings: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitSettings {
    /// Output of `git config --list --global`, one `key=value` per line.
    #[serde(default)]
    pub global_config: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitconfig_file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminal {
    /// Dotfile basename to file contents.
    #[serde(default)]
    pub shell_configs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh: Option<SshSettings>,
}

/// SSH metadata. Key files are listed by name only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    #[serde(default)]
    pub keys_found: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Languages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeRuntime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<PythonRuntime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rust: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRuntime {
    #[serde(default)]
    pub versions: Vec<String>,
    /// `name@version` entries.
    #[serde(default)]
    pub global_packages: Vec<String>,
    #[serde(default)]
    pub nvm_installed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonRuntime {
    #[serde(default)]
    pub pyenv_versions: Vec<String>,
    #[serde(default)]
    pub pyenv_global: Option<String>,
    /// `pip freeze` lines.
    #[serde(default)]
    pub pip_packages: Vec<String>,
}

impl Snapshot {
    pub fn homebrew(&self) -> Option<&Homebrew> {
        self.package_managers.homebrew.as_ref()
    }

    pub fn formula_count(&self) -> usize {
        self.homebrew().map_or(0, |h| h.formulae.len())
    }

    pub fn cask_count(&self) -> usize {
        self.homebrew().map_or(0, |h| h.casks.len())
    }

    pub fn extension_count(&self) -> usize {
        self.development.vscode.as_ref().map_or(0, |v| v.extensions.len())
    }

    pub fn node_package_count(&self) -> usize {
        self.languages.node.as_ref().map_or(0, |n| n.global_packages.len())
    }

    pub fn pip_package_count(&self) -> usize {
        self.languages.python.as_ref().map_or(0, |p| p.pip_packages.len())
    }
}
