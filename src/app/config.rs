//! Generator configuration loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, GeneratorConfig};

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "baseline.toml";

/// Load configuration from `explicit`, else `<dir>/baseline.toml`, else defaults.
///
/// An explicit path must exist; the implicit one is optional.
pub fn load_generator_config(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<GeneratorConfig, AppError> {
    let path: PathBuf = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(GeneratorConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&path)?;
    let config = GeneratorConfig::parse(&content).map_err(|e| {
        AppError::config_error(format!("Invalid config {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), "Loaded generator config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_without_file() {
        let dir = tempdir().unwrap();
        let config = load_generator_config(None, dir.path()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn picks_up_file_in_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[shell]\nrc_file = \".bashrc\"\n")
            .unwrap();

        let config = load_generator_config(None, dir.path()).unwrap();
        assert_eq!(config.shell.rc_file.as_str(), ".bashrc");
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = load_generator_config(Some(&dir.path().join("nope.toml")), dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn invalid_file_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[shell]\ncolour = true\n").unwrap();

        let err = load_generator_config(Some(&path), dir.path()).unwrap_err();
        assert!(err.to_string().contains("custom.toml"));
    }
}
