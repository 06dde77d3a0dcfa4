//! Tool catalog port definition.

use crate::domain::{Tool, ToolCategory};

/// Read-only access to installable tools.
pub trait ToolCatalog {
    /// Get a tool by id.
    fn get(&self, id: &str) -> Option<&Tool>;

    /// List all tools sorted by id.
    fn list_all(&self) -> Vec<&Tool>;

    /// Get all tool ids.
    fn ids(&self) -> Vec<&str>;

    /// Tools of one category, sorted by id.
    fn by_category(&self, category: ToolCategory) -> Vec<&Tool> {
        self.list_all().into_iter().filter(|tool| tool.category == category).collect()
    }
}
