//! Script generation from selections and snapshots.
//!
//! Every generator is infallible: input problems are recovered here and show
//! up at most as skipped steps in the produced script.

pub mod filters;
mod scan;
mod selection;
mod snapshot;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::generator_config::GeneratorConfig;
use crate::domain::script::{Script, render};
use crate::domain::snapshot::{Snapshot, legacy, parse_snapshot};
use crate::domain::Selection;

pub use scan::SNAPSHOT_FILE;

/// Builds installer and scan scripts with one configuration.
#[derive(Debug, Clone, Default)]
pub struct ScriptGenerator {
    config: GeneratorConfig,
    generated_on: Option<NaiveDate>,
}

impl ScriptGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config, generated_on: None }
    }

    /// Stamp scripts with a `# Generated:` header line.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Installer steps for a selection, before rendering.
    pub fn selection_script(&self, selection: &Selection) -> Script {
        self.stamp(selection::build(selection, &self.config))
    }

    /// Restore steps for a snapshot, before rendering.
    pub fn snapshot_script(&self, snapshot: &Snapshot) -> Script {
        self.stamp(snapshot::build(snapshot, &self.config))
    }

    pub fn install_script(&self, selection: &Selection) -> String {
        render(&self.selection_script(selection), &self.config.render_settings())
    }

    pub fn restore_script(&self, snapshot: &Snapshot) -> String {
        render(&self.snapshot_script(snapshot), &self.config.render_settings())
    }

    /// Restore script from raw snapshot text, whatever its state.
    pub fn restore_script_from_text(&self, raw: &str) -> String {
        self.restore_script(&snapshot_or_legacy(raw))
    }

    pub fn scan_script(&self) -> String {
        scan::build(self.generated_on)
    }

    fn stamp(&self, mut script: Script) -> Script {
        script.generated_on = self.generated_on;
        script
    }
}

/// Decode snapshot text without failing.
///
/// Valid JSON snapshots are used as-is. Anything else goes through the legacy
/// text parser, and input that yields nothing becomes an empty snapshot.
pub fn snapshot_or_legacy(raw: &str) -> Snapshot {
    match parse_snapshot(raw) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            debug!(error = %err, "Falling back to legacy snapshot parser");
            legacy::parse_legacy(raw).unwrap_or_else(|_| legacy::empty_legacy())
        }
    }
}

/// Installer script for a selection, with default settings.
pub fn generate_install_script(selection: &Selection) -> String {
    ScriptGenerator::default().install_script(selection)
}

/// Installer script from raw snapshot text, with default settings.
pub fn generate_install_script_from_snapshot(raw: &str) -> String {
    ScriptGenerator::default().restore_script_from_text(raw)
}

/// Script that scans the current Mac into a snapshot file.
pub fn generate_scan_script() -> String {
    ScriptGenerator::default().scan_script()
}
