use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ScriptWriter;

/// Captures written scripts by path.
#[derive(Default)]
pub struct MemoryScriptWriter {
    pub written: Mutex<BTreeMap<PathBuf, String>>,
}

#[allow(dead_code)]
impl MemoryScriptWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.written.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn count(&self) -> usize {
        self.written.lock().unwrap().len()
    }
}

impl ScriptWriter for MemoryScriptWriter {
    fn write_script(&self, path: &Path, contents: &str) -> Result<(), AppError> {
        self.written.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
