use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, Selection};
use crate::ports::SelectionStore;

/// On-disk encoding of a selection file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionFormat {
    Json,
    Yaml,
}

impl SelectionFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref()
        {
            Some("yml" | "yaml") => SelectionFormat::Yaml,
            _ => SelectionFormat::Json,
        }
    }
}

/// Selection files on the local filesystem, JSON or YAML by extension.
#[derive(Debug, Clone, Default)]
pub struct FilesystemSelectionStore;

impl FilesystemSelectionStore {
    pub fn new() -> Self {
        Self
    }

    /// Decode selection text in the format implied by `path`.
    pub fn decode(path: &Path, content: &str) -> Result<Selection, AppError> {
        let invalid = |details: String| AppError::InvalidSelection {
            path: path.display().to_string(),
            details,
        };
        match SelectionFormat::for_path(path) {
            SelectionFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string())),
            SelectionFormat::Yaml => serde_yaml::from_str(content).map_err(|e| invalid(e.to_string())),
        }
    }

    /// Encode a selection in the format implied by `path`.
    pub fn encode(path: &Path, selection: &Selection) -> Result<String, AppError> {
        let invalid = |details: String| AppError::InvalidSelection {
            path: path.display().to_string(),
            details,
        };
        match SelectionFormat::for_path(path) {
            SelectionFormat::Json => serde_json::to_string_pretty(selection)
                .map(|mut text| {
                    text.push('\n');
                    text
                })
                .map_err(|e| invalid(e.to_string())),
            SelectionFormat::Yaml => serde_yaml::to_string(selection).map_err(|e| invalid(e.to_string())),
        }
    }
}

impl SelectionStore for FilesystemSelectionStore {
    fn load(&self, path: &Path) -> Result<Selection, AppError> {
        let content = fs::read_to_string(path)?;
        let selection = Self::decode(path, &content)?;
        debug!(path = %path.display(), tools = selection.tools().len(), "Loaded selection");
        Ok(selection)
    }

    fn save(&self, path: &Path, selection: &Selection) -> Result<(), AppError> {
        let content = Self::encode(path, selection)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        debug!(path = %path.display(), "Saved selection");
        Ok(())
    }
}
