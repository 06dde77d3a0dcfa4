//! Tool catalog loaded from embedded TOML tables.

use include_dir::{Dir, include_dir};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;
use url::Url;

use crate::domain::{AppError, Tool, ToolCategory, ToolId, ToolType};
use crate::ports::ToolCatalog;

/// Embedded catalog directory, one table per category.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

/// Layout of a catalog file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    category: String,
    #[serde(default)]
    tools: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogEntry {
    id: String,
    name: String,
    #[serde(rename = "type")]
    tool_type: ToolType,
    install_command: String,
    #[serde(default)]
    description: String,
    icon: Option<String>,
    #[serde(default)]
    popular: bool,
    #[serde(default)]
    dev_pick: bool,
    homepage: Option<String>,
}

/// Read-only catalog compiled into the binary.
pub struct EmbeddedToolCatalog {
    tools: BTreeMap<String, Tool>,
}

impl EmbeddedToolCatalog {
    /// Parse every embedded catalog table.
    pub fn new() -> Result<Self, AppError> {
        let mut files: Vec<(&str, &str)> = Vec::new();
        for file in CATALOG_DIR.files() {
            let path = file.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let name = path.to_str().unwrap_or("<catalog>");
            let content = file.contents_utf8().ok_or_else(|| AppError::InvalidCatalog {
                source_file: name.to_string(),
                reason: "file is not valid UTF-8".to_string(),
            })?;
            files.push((name, content));
        }
        Self::from_sources(files)
    }

    /// Build a catalog from `(file name, TOML text)` pairs.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, AppError> {
        let mut tools = BTreeMap::new();

        for (source_file, content) in sources {
            let invalid = |reason: String| AppError::InvalidCatalog {
                source_file: source_file.to_string(),
                reason,
            };

            let parsed: CatalogFile =
                toml::from_str(content).map_err(|e| invalid(e.to_string()))?;
            let category = ToolCategory::from_name(&parsed.category)
                .ok_or_else(|| invalid(format!("Unknown category '{}'", parsed.category)))?;

            for entry in parsed.tools {
                let tool = entry.into_tool(category).map_err(&invalid)?;
                let key = tool.id.as_str().to_string();
                if tools.contains_key(&key) {
                    return Err(invalid(format!("Duplicate tool id '{}'", key)));
                }
                tools.insert(key, tool);
            }
        }

        debug!(tools = tools.len(), "Loaded tool catalog");
        Ok(Self { tools })
    }
}

impl CatalogEntry {
    fn into_tool(self, category: ToolCategory) -> Result<Tool, String> {
        let id = ToolId::new(&self.id).map_err(|_| format!("Invalid tool id '{}'", self.id))?;
        if self.name.trim().is_empty() {
            return Err(format!("Tool '{}' has an empty name", self.id));
        }
        if self.install_command.trim().is_empty() {
            return Err(format!("Tool '{}' has an empty install command", self.id));
        }
        let homepage = self
            .homepage
            .map(|raw| {
                Url::parse(&raw).map_err(|e| format!("Tool '{}' homepage '{}': {}", self.id, raw, e))
            })
            .transpose()?;

        Ok(Tool {
            id,
            name: self.name,
            category,
            tool_type: self.tool_type,
            install_command: self.install_command,
            description: self.description,
            icon: self.icon,
            popular: self.popular,
            dev_pick: self.dev_pick,
            homepage,
        })
    }
}

impl ToolCatalog for EmbeddedToolCatalog {
    fn get(&self, id: &str) -> Option<&Tool> {
        self.tools.get(id)
    }

    fn list_all(&self) -> Vec<&Tool> {
        self.tools.values().collect()
    }

    fn ids(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = EmbeddedToolCatalog::new().expect("embedded catalog parses");

        let node = catalog.get("node").expect("node is in the catalog");
        assert_eq!(node.tool_type, ToolType::Brew);
        assert_eq!(node.canonical_target(), Some("node"));

        for category in ToolCategory::ALL {
            assert!(!catalog.by_category(category).is_empty(), "{} is empty", category);
        }
    }

    #[test]
    fn embedded_entries_are_well_formed() {
        let catalog = EmbeddedToolCatalog::new().unwrap();
        for tool in catalog.list_all() {
            assert!(!tool.install_target().is_empty(), "{} has no target", tool.id);
            if tool.tool_type == ToolType::BrewCask {
                assert!(tool.install_command.starts_with("brew install --cask "));
            }
        }
    }

    #[test]
    fn ids_are_sorted() {
        let catalog = EmbeddedToolCatalog::new().unwrap();
        let ids = catalog.ids();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn duplicate_ids_across_files_rejected() {
        let a = "category = \"cli-tools\"\n[[tools]]\nid = \"jq\"\nname = \"jq\"\ntype = \"brew\"\ninstall_command = \"brew install jq\"\n";
        let b = "category = \"devops\"\n[[tools]]\nid = \"jq\"\nname = \"jq again\"\ntype = \"brew\"\ninstall_command = \"brew install jq\"\n";

        let err = EmbeddedToolCatalog::from_sources([("a.toml", a), ("b.toml", b)])
            .err()
            .expect("duplicate must fail");
        assert!(matches!(err, AppError::InvalidCatalog { ref source_file, .. } if source_file == "b.toml"));
    }

    #[test]
    fn unknown_category_rejected() {
        let raw = "category = \"games\"\n";
        let err = EmbeddedToolCatalog::from_sources([("games.toml", raw)]).err().unwrap();
        assert!(err.to_string().contains("Unknown category 'games'"));
    }

    #[test]
    fn bad_homepage_rejected() {
        let raw = "category = \"cli-tools\"\n[[tools]]\nid = \"jq\"\nname = \"jq\"\ntype = \"brew\"\ninstall_command = \"brew install jq\"\nhomepage = \"not a url\"\n";
        let err = EmbeddedToolCatalog::from_sources([("cli.toml", raw)]).err().unwrap();
        assert!(err.to_string().contains("homepage"));
    }

    #[test]
    fn optional_fields_default() {
        let raw = "category = \"devops\"\n[[tools]]\nid = \"tf\"\nname = \"Terraform\"\ntype = \"custom\"\ninstall_command = \"brew tap hashicorp/tap && brew install hashicorp/tap/terraform\"\n";
        let catalog = EmbeddedToolCatalog::from_sources([("devops.toml", raw)]).unwrap();
        let tool = catalog.get("tf").unwrap();

        assert_eq!(tool.category, ToolCategory::Devops);
        assert!(!tool.popular);
        assert!(tool.homepage.is_none());
        assert_eq!(tool.canonical_target(), None);
    }
}
