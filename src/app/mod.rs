pub mod cli;
pub mod commands;
pub mod config;
mod context;

use std::path::Path;

use chrono::Local;

use crate::adapters::{EmbeddedToolCatalog, FilesystemScriptWriter, FilesystemSelectionStore};
use crate::domain::{AppError, ScriptGenerator};

pub use context::AppContext;

/// Context wired to the embedded catalog and the local filesystem.
pub type DefaultContext =
    AppContext<EmbeddedToolCatalog, FilesystemSelectionStore, FilesystemScriptWriter>;

/// Build the filesystem-backed context, stamping scripts with today's date.
pub fn default_context(config_path: Option<&Path>) -> Result<DefaultContext, AppError> {
    let cwd = std::env::current_dir()?;
    let config = config::load_generator_config(config_path, &cwd)?;
    let generator = ScriptGenerator::new(config).with_date(Local::now().date_naive());

    Ok(AppContext::new(
        EmbeddedToolCatalog::new()?,
        FilesystemSelectionStore::new(),
        FilesystemScriptWriter::new(),
        generator,
    ))
}
