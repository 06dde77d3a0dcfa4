//! Select command: builds a selection from catalog ids and saves it.

use std::path::PathBuf;

use tracing::info;

use super::catalog::not_found;
use crate::app::AppContext;
use crate::domain::{AppError, Language, LanguageVersion, Selection};
use crate::ports::{ScriptWriter, SelectionStore, ToolCatalog};

/// Default selection file name.
pub const DEFAULT_OUTPUT: &str = "baseline-selection.json";

#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    pub tool_ids: Vec<String>,
    /// Runtime pins written as `LANGUAGE=VERSION`.
    pub pins: Vec<String>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct SelectOutcome {
    pub path: PathBuf,
    pub tools: Vec<String>,
    pub pins: usize,
}

pub fn execute<C, S, W>(
    ctx: &AppContext<C, S, W>,
    options: SelectOptions,
) -> Result<SelectOutcome, AppError>
where
    C: ToolCatalog,
    S: SelectionStore,
    W: ScriptWriter,
{
    if options.tool_ids.is_empty() {
        return Err(AppError::config_error("No tools selected"));
    }

    let mut selection = Selection::new();
    for id in &options.tool_ids {
        let tool = ctx.catalog().get(id).ok_or_else(|| not_found(ctx.catalog(), id))?;
        if !selection.add_tool(tool.clone()) {
            return Err(AppError::DuplicateTool(id.clone()));
        }
    }
    for pin in &options.pins {
        selection.language_versions.push(parse_pin(pin)?);
    }

    let path = options.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    ctx.selections().save(&path, &selection)?;
    info!(path = %path.display(), tools = selection.tools().len(), "Saved selection");

    Ok(SelectOutcome {
        path,
        tools: selection.tools().iter().map(|t| t.id.to_string()).collect(),
        pins: selection.language_versions.len(),
    })
}

/// Parse `node=20` style runtime pins.
pub fn parse_pin(raw: &str) -> Result<LanguageVersion, AppError> {
    let invalid = || {
        AppError::config_error(format!(
            "Invalid runtime pin '{}': expected node=VERSION, python=VERSION or ruby=VERSION",
            raw
        ))
    };
    let (name, version) = raw.split_once('=').ok_or_else(invalid)?;
    let language = match name.trim().to_ascii_lowercase().as_str() {
        "node" | "nodejs" => Language::Node,
        "python" => Language::Python,
        "ruby" => Language::Ruby,
        _ => return Err(invalid()),
    };
    let version = version.trim();
    if version.is_empty() || !version.chars().all(|c| c.is_ascii_alphanumeric() || ".-_".contains(c))
    {
        return Err(invalid());
    }
    Ok(LanguageVersion { language, version: version.to_string() })
}
