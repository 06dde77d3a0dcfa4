//! Selection persistence port definition.

use std::path::Path;

use crate::domain::{AppError, Selection};

/// Loads and saves selections.
pub trait SelectionStore {
    fn load(&self, path: &Path) -> Result<Selection, AppError>;

    fn save(&self, path: &Path, selection: &Selection) -> Result<(), AppError>;
}
