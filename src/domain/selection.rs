//! Selection domain model: the tools and custom scripts a user has chosen.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Tool, ToolType};

/// Runtime whose version can be pinned in a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Node,
    Python,
    Ruby,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::Node => "Node.js",
            Language::Python => "Python",
            Language::Ruby => "Ruby",
        })
    }
}

/// A runtime version pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageVersion {
    pub language: Language,
    pub version: String,
}

/// Kind of user-authored script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomScriptKind {
    /// Appended to the shell rc file.
    Dotfile,
    /// Executed as-is.
    Command,
}

/// Free-form script attached to a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomScript {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CustomScriptKind,
    pub content: String,
}

/// Ordered set of chosen tools plus version pins and custom scripts.
///
/// Tools keep insertion order; no two tools share an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SelectionRepr")]
pub struct Selection {
    tools: Vec<Tool>,
    pub language_versions: Vec<LanguageVersion>,
    pub custom_scripts: Vec<CustomScript>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectionRepr {
    #[serde(default)]
    tools: Vec<Tool>,
    #[serde(default)]
    language_versions: Vec<LanguageVersion>,
    #[serde(default)]
    custom_scripts: Vec<CustomScript>,
}

impl TryFrom<SelectionRepr> for Selection {
    type Error = AppError;

    fn try_from(repr: SelectionRepr) -> Result<Self, Self::Error> {
        let mut selection = Selection::with_tools(repr.tools)?;
        selection.language_versions = repr.language_versions;
        selection.custom_scripts = repr.custom_scripts;
        Ok(selection)
    }
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from tools, rejecting duplicate ids.
    pub fn with_tools(tools: impl IntoIterator<Item = Tool>) -> Result<Self, AppError> {
        let mut selection = Self::new();
        for tool in tools {
            let id = tool.id.to_string();
            if !selection.add_tool(tool) {
                return Err(AppError::DuplicateTool(id));
            }
        }
        Ok(selection)
    }

    /// Selected tools in insertion order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Append a tool. Returns `false` (and leaves the selection untouched)
    /// when a tool with the same id is already selected.
    pub fn add_tool(&mut self, tool: Tool) -> bool {
        if self.contains(&tool.id) {
            return false;
        }
        self.tools.push(tool);
        true
    }

    /// Remove a tool by id, returning it if it was selected.
    pub fn remove_tool(&mut self, id: &str) -> Option<Tool> {
        let index = self.tools.iter().position(|t| t.id.as_str() == id)?;
        Some(self.tools.remove(index))
    }

    /// Add the tool if absent, remove it if present. Returns whether the tool
    /// is selected afterwards.
    pub fn toggle_tool(&mut self, tool: Tool) -> bool {
        if self.remove_tool(&tool.id).is_some() {
            false
        } else {
            self.tools.push(tool);
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tools.iter().any(|t| t.id.as_str() == id)
    }

    /// Tools of one install type, preserving insertion order.
    pub fn tools_of_type(&self, tool_type: ToolType) -> impl Iterator<Item = &Tool> {
        self.tools.iter().filter(move |t| t.tool_type == tool_type)
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && self.language_versions.is_empty() && self.custom_scripts.is_empty()
    }

    /// Reset to the empty selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tool::fixtures::tool;

    fn node() -> Tool {
        tool("node", "Node.js", ToolType::Brew, "brew install node")
    }

    fn slack() -> Tool {
        tool("slack", "Slack", ToolType::BrewCask, "brew install --cask slack")
    }

    #[test]
    fn add_rejects_duplicate_ids() {
        let mut selection = Selection::new();

        assert!(selection.add_tool(node()));
        assert!(!selection.add_tool(node()));
        assert_eq!(selection.tools().len(), 1);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Selection::new();

        assert!(selection.toggle_tool(node()));
        assert!(selection.contains("node"));
        assert!(!selection.toggle_tool(node()));
        assert!(!selection.contains("node"));
    }

    #[test]
    fn preserves_insertion_order() {
        let selection = Selection::with_tools([slack(), node()]).unwrap();
        let ids: Vec<_> = selection.tools().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["slack", "node"]);
    }

    #[test]
    fn with_tools_reports_duplicate() {
        let err = Selection::with_tools([node(), slack(), node()]).unwrap_err();
        assert!(matches!(err, AppError::DuplicateTool(id) if id == "node"));
    }

    #[test]
    fn tools_of_type_filters() {
        let selection = Selection::with_tools([slack(), node()]).unwrap();
        let casks: Vec<_> = selection.tools_of_type(ToolType::BrewCask).collect();
        assert_eq!(casks.len(), 1);
        assert_eq!(casks[0].id.as_str(), "slack");
    }

    #[test]
    fn deserializes_persisted_ui_state() {
        let json = r#"{
            "tools": [{"id":"node","name":"Node.js","category":"package-managers","type":"brew","installCommand":"brew install node","description":"JS runtime"}],
            "languageVersions": [{"language":"python","version":"3.12.2"}],
            "customScripts": [{"name":"aliases","type":"dotfile","content":"alias ll='ls -la'"}]
        }"#;

        let selection: Selection = serde_json::from_str(json).unwrap();

        assert_eq!(selection.tools().len(), 1);
        assert_eq!(selection.language_versions[0].language, Language::Python);
        assert_eq!(selection.custom_scripts[0].kind, CustomScriptKind::Dotfile);
    }

    #[test]
    fn deserialization_rejects_duplicate_tools() {
        let entry = r#"{"id":"node","name":"Node.js","category":"package-managers","type":"brew","installCommand":"brew install node"}"#;
        let json = format!(r#"{{"tools":[{entry},{entry}]}}"#);

        let err = serde_json::from_str::<Selection>(&json).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn empty_object_is_empty_selection() {
        let selection: Selection = serde_json::from_str("{}").unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let selection = Selection::with_tools([node()]).unwrap();
        let json = serde_json::to_string(&selection).unwrap();
        assert!(json.contains("\"languageVersions\""));
        assert!(json.contains("\"installCommand\""));
    }
}
