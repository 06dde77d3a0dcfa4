//! Inspect command: validates snapshot text and summarizes it.

use std::path::Path;

use super::read_input;
use crate::domain::{AppError, Snapshot, SnapshotFormat, load_snapshot};

/// What a snapshot would restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotReport {
    pub format: SnapshotFormat,
    pub hostname: String,
    pub os_version: String,
    pub arch: String,
    pub scanned_at: Option<String>,
    pub taps: usize,
    pub formulae: usize,
    pub casks: usize,
    pub applications: usize,
    pub vscode_extensions: usize,
    pub node_packages: usize,
    pub pip_packages: usize,
    pub shell_configs: Vec<String>,
    pub ssh_keys: usize,
}

impl SnapshotReport {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            format: snapshot.format,
            hostname: snapshot.meta.hostname.clone(),
            os_version: snapshot.meta.os_version.clone(),
            arch: snapshot.meta.arch.clone(),
            scanned_at: snapshot.meta.timestamp.clone(),
            taps: snapshot.homebrew().map_or(0, |brew| brew.taps.len()),
            formulae: snapshot.formula_count(),
            casks: snapshot.cask_count(),
            applications: snapshot.applications.len(),
            vscode_extensions: snapshot.extension_count(),
            node_packages: snapshot.node_package_count(),
            pip_packages: snapshot.pip_package_count(),
            shell_configs: snapshot.terminal.shell_configs.keys().cloned().collect(),
            ssh_keys: snapshot.terminal.ssh.as_ref().map_or(0, |ssh| ssh.keys_found.len()),
        }
    }
}

/// Parse the snapshot at `path` (or stdin for `-`) and report on it.
pub fn execute(path: &Path) -> Result<SnapshotReport, AppError> {
    let raw = read_input(path)?;
    let snapshot = load_snapshot(&raw)?;
    Ok(SnapshotReport::from_snapshot(&snapshot))
}
