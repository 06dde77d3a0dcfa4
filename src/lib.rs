//! baseline: generate macOS setup scripts from tool selections and machine snapshots.
//!
//! The generators are pure: they return script text and never fail. Reading
//! files, the embedded catalog and the CLI live in [`app`] and [`adapters`].

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::commands::OutputTarget;
pub use app::commands::catalog::ToolSummary;
pub use app::commands::inspect::SnapshotReport;
pub use domain::{
    AppError, CustomScript, CustomScriptKind, GeneratorConfig, Language, LanguageVersion,
    ParseError, ScriptGenerator, Selection, Snapshot, SnapshotFormat, Tool, ToolCategory, ToolId,
    ToolType, generate_install_script, generate_install_script_from_snapshot,
    generate_scan_script, load_snapshot, parse_snapshot, snapshot_or_legacy,
};
