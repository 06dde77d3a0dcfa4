pub mod error;
pub mod generate;
pub mod generator_config;
pub mod identifiers;
pub mod script;
pub mod selection;
pub mod snapshot;
pub mod tool;

pub use error::AppError;
pub use generate::{
    ScriptGenerator, generate_install_script, generate_install_script_from_snapshot,
    generate_scan_script, snapshot_or_legacy,
};
pub use generator_config::{FilterConfig, GeneratorConfig, ScriptConfig, ShellConfig};
pub use script::{HomePath, Script, Statement, shell_quote};
pub use selection::{CustomScript, CustomScriptKind, Language, LanguageVersion, Selection};
pub use snapshot::{ParseError, Snapshot, SnapshotFormat, load_snapshot, parse_snapshot};
pub use tool::{Tool, ToolCategory, ToolId, ToolType};
