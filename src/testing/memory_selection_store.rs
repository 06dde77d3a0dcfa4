use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, Selection};
use crate::ports::SelectionStore;

/// Selection store backed by a map.
#[derive(Default)]
pub struct MemorySelectionStore {
    pub selections: Mutex<BTreeMap<PathBuf, Selection>>,
}

#[allow(dead_code)]
impl MemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, selection: Selection) {
        self.selections.lock().unwrap().insert(path.into(), selection);
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<Selection> {
        self.selections.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl SelectionStore for MemorySelectionStore {
    fn load(&self, path: &Path) -> Result<Selection, AppError> {
        self.get(path).ok_or_else(|| {
            AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }

    fn save(&self, path: &Path, selection: &Selection) -> Result<(), AppError> {
        self.insert(path, selection.clone());
        Ok(())
    }
}
