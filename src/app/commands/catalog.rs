//! Catalog command: lists the embedded tools.

use crate::domain::{AppError, Tool, ToolCategory, ToolType};
use crate::ports::ToolCatalog;

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSummary {
    pub id: String,
    pub name: String,
    pub category: ToolCategory,
    pub tool_type: ToolType,
    pub description: String,
    pub popular: bool,
    pub dev_pick: bool,
}

impl From<&Tool> for ToolSummary {
    fn from(tool: &Tool) -> Self {
        Self {
            id: tool.id.to_string(),
            name: tool.name.clone(),
            category: tool.category,
            tool_type: tool.tool_type,
            description: tool.description.clone(),
            popular: tool.popular,
            dev_pick: tool.dev_pick,
        }
    }
}

/// Summaries of all tools, or of one category.
pub fn list<C: ToolCatalog>(catalog: &C, category: Option<ToolCategory>) -> Vec<ToolSummary> {
    let tools = match category {
        Some(category) => catalog.by_category(category),
        None => catalog.list_all(),
    };
    tools.into_iter().map(ToolSummary::from).collect()
}

/// Full entry for one tool id.
pub fn detail<C: ToolCatalog>(catalog: &C, id: &str) -> Result<Tool, AppError> {
    catalog.get(id).cloned().ok_or_else(|| not_found(catalog, id))
}

pub(crate) fn not_found<C: ToolCatalog>(catalog: &C, id: &str) -> AppError {
    AppError::ToolNotFound { id: id.to_string(), available: catalog.ids().join(", ") }
}
