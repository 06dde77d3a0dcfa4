//! Typed shell-script model.
//!
//! Generators lower their input into a [`Script`] of [`Statement`]s; the
//! renderer is the only place that turns them into bash text.

pub mod heredoc;
mod path;
pub mod quote;
pub mod render;

use chrono::NaiveDate;

use crate::domain::Language;

pub use path::HomePath;
pub use quote::shell_quote;
pub use render::{RenderSettings, render};

/// Severity of an informational line printed by the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warn,
}

/// One step of a generated installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Visible section heading.
    Section(String),
    /// Install Homebrew when missing and register its shellenv once.
    BootstrapHomebrew,
    AddTap { tap: String },
    InstallFormula { label: String, formula: String },
    /// GUI app; `label` is the human-readable `.app` name.
    InstallCask { label: String, cask: String },
    InstallMasApp { label: String, app_id: String },
    InstallNpmGlobal { package: String },
    InstallPipPackage { package: String },
    InstallVscodeExtension { extension: String },
    /// Install `formula` through Homebrew when `command` is not on PATH.
    EnsureCommand { command: String, formula: String },
    InstallRuntime { language: Language, version: String },
    GitConfig { key: String, value: String },
    /// Caller-authored shell, emitted verbatim.
    RunRaw { label: String, command: String },
    /// Append `content` to a file under `$HOME`, once.
    AppendToFile { label: String, path: HomePath, content: String },
    EnsureDir { path: HomePath, mode: u32 },
    Chmod { path: HomePath, mode: u32 },
    Notice { tone: Tone, text: String },
}

impl Statement {
    /// Every caller-supplied string the statement carries.
    fn text_fields(&self) -> Vec<&str> {
        match self {
            Statement::Section(text) => vec![text.as_str()],
            Statement::BootstrapHomebrew => Vec::new(),
            Statement::AddTap { tap } => vec![tap.as_str()],
            Statement::InstallFormula { label, formula } => vec![label.as_str(), formula.as_str()],
            Statement::InstallCask { label, cask } => vec![label.as_str(), cask.as_str()],
            Statement::InstallMasApp { label, app_id } => vec![label.as_str(), app_id.as_str()],
            Statement::InstallNpmGlobal { package } | Statement::InstallPipPackage { package } => {
                vec![package.as_str()]
            }
            Statement::InstallVscodeExtension { extension } => vec![extension.as_str()],
            Statement::EnsureCommand { command, formula } => vec![command.as_str(), formula.as_str()],
            Statement::InstallRuntime { version, .. } => vec![version.as_str()],
            Statement::GitConfig { key, value } => vec![key.as_str(), value.as_str()],
            Statement::RunRaw { label, command } => vec![label.as_str(), command.as_str()],
            Statement::AppendToFile { label, path, content } => {
                vec![label.as_str(), path.as_str(), content.as_str()]
            }
            Statement::EnsureDir { path, .. } | Statement::Chmod { path, .. } => vec![path.as_str()],
            Statement::Notice { text, .. } => vec![text.as_str()],
        }
    }

    /// Whether any field carries private key material.
    pub fn contains_secret(&self) -> bool {
        self.text_fields().into_iter().any(quote::contains_private_key)
    }

    /// Short name used in status lines when the statement is withheld.
    /// Falls back to the statement kind when the label itself is sensitive.
    pub fn display_label(&self) -> String {
        let label = match self {
            Statement::InstallFormula { label, .. }
            | Statement::InstallCask { label, .. }
            | Statement::InstallMasApp { label, .. }
            | Statement::RunRaw { label, .. }
            | Statement::AppendToFile { label, .. } => Some(label.as_str()),
            Statement::GitConfig { key, .. } => Some(key.as_str()),
            _ => None,
        };
        match label {
            Some(label) if !quote::contains_private_key(label) => quote::single_line(label),
            _ => self.kind().to_string(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Statement::Section(_) => "section",
            Statement::BootstrapHomebrew => "homebrew",
            Statement::AddTap { .. } => "tap",
            Statement::InstallFormula { .. } => "formula",
            Statement::InstallCask { .. } => "cask",
            Statement::InstallMasApp { .. } => "app store app",
            Statement::InstallNpmGlobal { .. } => "npm package",
            Statement::InstallPipPackage { .. } => "pip package",
            Statement::InstallVscodeExtension { .. } => "vscode extension",
            Statement::EnsureCommand { .. } => "command",
            Statement::InstallRuntime { .. } => "runtime",
            Statement::GitConfig { .. } => "git config",
            Statement::RunRaw { .. } => "command",
            Statement::AppendToFile { .. } => "file append",
            Statement::EnsureDir { .. } => "directory",
            Statement::Chmod { .. } => "permissions",
            Statement::Notice { .. } => "notice",
        }
    }
}

/// A labelled count shown in the completion summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: String,
    pub count: usize,
}

/// A complete installer script prior to rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    /// Subtitle in the header comment and banner.
    pub title: String,
    /// `label: value` lines printed under the banner.
    pub banner: Vec<(String, String)>,
    pub statements: Vec<Statement>,
    pub summary: Vec<SummaryLine>,
    pub next_steps: Vec<String>,
    pub generated_on: Option<NaiveDate>,
}

impl Script {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn section(&mut self, title: impl Into<String>) {
        self.push(Statement::Section(title.into()));
    }

    pub fn count(&mut self, label: impl Into<String>, count: usize) {
        self.summary.push(SummaryLine { label: label.into(), count });
    }
}
