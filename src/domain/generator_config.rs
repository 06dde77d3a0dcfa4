//! Generator configuration loaded from `baseline.toml`.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::script::{HomePath, RenderSettings};

/// Settings that shape generated scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub script: ScriptConfig,
    #[serde(default)]
    pub filters: FilterConfig,
}

impl GeneratorConfig {
    /// Parse and validate configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.script.validate()
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            profile_file: self.shell.profile_file.clone(),
            log_file: self.script.log_file.clone(),
        }
    }
}

/// User shell files, relative to `$HOME`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// Receives dotfile custom scripts and is sourced in the next steps.
    #[serde(default = "default_rc_file")]
    pub rc_file: HomePath,
    /// Receives the Homebrew `shellenv` line.
    #[serde(default = "default_profile_file")]
    pub profile_file: HomePath,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { rc_file: default_rc_file(), profile_file: default_profile_file() }
    }
}

fn default_rc_file() -> HomePath {
    HomePath::from_static(".zshrc")
}

fn default_profile_file() -> HomePath {
    HomePath::from_static(".zprofile")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
    /// Where generated scripts send installer output.
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self { log_file: default_log_file() }
    }
}

impl ScriptConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.log_file.trim().is_empty() {
            return Err(AppError::config_error("script.log_file must not be empty"));
        }
        if self.log_file.chars().any(char::is_control) {
            return Err(AppError::config_error("script.log_file must be a single line"));
        }
        Ok(())
    }
}

fn default_log_file() -> String {
    "/tmp/baseline.log".to_string()
}

/// Packages that ship with their runtime and are never reinstalled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(default = "default_npm_exclude")]
    pub npm_exclude: Vec<String>,
    #[serde(default = "default_pip_exclude")]
    pub pip_exclude: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { npm_exclude: default_npm_exclude(), pip_exclude: default_pip_exclude() }
    }
}

fn default_npm_exclude() -> Vec<String> {
    vec!["npm".to_string(), "corepack".to_string()]
}

fn default_pip_exclude() -> Vec<String> {
    vec!["pip".to_string(), "setuptools".to_string(), "wheel".to_string()]
}
