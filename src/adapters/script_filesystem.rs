use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ScriptWriter;

/// Writes scripts to disk with the executable bit set.
#[derive(Debug, Clone, Default)]
pub struct FilesystemScriptWriter;

impl FilesystemScriptWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptWriter for FilesystemScriptWriter {
    fn write_script(&self, path: &Path, contents: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(path, perms)?;
        }
        debug!(path = %path.display(), bytes = contents.len(), "Wrote script");
        Ok(())
    }
}
