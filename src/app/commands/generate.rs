//! Generate command: installer script from a saved selection.

use std::path::Path;

use tracing::{info, warn};

use super::{OutputTarget, emit};
use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ScriptWriter, SelectionStore, ToolCatalog};

/// Default installer file name.
pub const DEFAULT_OUTPUT: &str = "setup-macos.sh";

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub output: OutputTarget,
    pub tools: usize,
    pub custom_scripts: usize,
    /// Selected tool ids the embedded catalog does not know.
    pub unknown_tools: Vec<String>,
}

pub fn execute<C, S, W>(
    ctx: &AppContext<C, S, W>,
    selection_path: &Path,
    output: OutputTarget,
) -> Result<GenerateOutcome, AppError>
where
    C: ToolCatalog,
    S: SelectionStore,
    W: ScriptWriter,
{
    let selection = ctx.selections().load(selection_path)?;

    let unknown_tools: Vec<String> = selection
        .tools()
        .iter()
        .filter(|tool| ctx.catalog().get(tool.id.as_str()).is_none())
        .map(|tool| tool.id.to_string())
        .collect();
    for id in &unknown_tools {
        warn!(tool = %id, "Selected tool is not in the catalog; using its recorded command");
    }

    let script = ctx.generator().install_script(&selection);
    emit(ctx.scripts(), &output, &script)?;
    info!(output = %output, tools = selection.tools().len(), "Generated install script");

    Ok(GenerateOutcome {
        output,
        tools: selection.tools().len(),
        custom_scripts: selection.custom_scripts.len(),
        unknown_tools,
    })
}
