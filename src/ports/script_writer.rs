//! Script output port definition.

use std::path::Path;

use crate::domain::AppError;

/// Writes generated scripts.
pub trait ScriptWriter {
    /// Write `contents` to `path` as an executable file.
    fn write_script(&self, path: &Path, contents: &str) -> Result<(), AppError>;
}
