//! Interactive and flag-driven selection building.

use std::io::IsTerminal;
use std::path::PathBuf;

use dialoguer::MultiSelect;

use crate::app::DefaultContext;
use crate::app::commands::select::{self, SelectOptions};
use crate::domain::{AppError, ToolCategory};
use crate::ports::ToolCatalog;

pub fn run_select(
    ctx: &DefaultContext,
    tools: Vec<String>,
    pins: Vec<String>,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let tool_ids = if tools.is_empty() {
        match prompt_tools(ctx.catalog())? {
            Some(ids) => ids,
            None => return Ok(()),
        }
    } else {
        tools
    };

    let outcome = select::execute(ctx, SelectOptions { tool_ids, pins, output })?;
    println!("✅ Saved {} tool(s) to {}", outcome.tools.len(), outcome.path.display());
    for (i, id) in outcome.tools.iter().enumerate() {
        println!("  {}. {}", i + 1, id);
    }
    println!("  Next: baseline generate {}", outcome.path.display());
    Ok(())
}

/// Ask for tools one category at a time. `None` when the user cancels.
fn prompt_tools<C: ToolCatalog>(catalog: &C) -> Result<Option<Vec<String>>, AppError> {
    if !std::io::stdin().is_terminal() {
        return Err(AppError::config_error(
            "No --tool given and stdin is not a terminal; pass tools with --tool ID",
        ));
    }

    let mut ids = Vec::new();
    for category in ToolCategory::ALL {
        let tools = catalog.by_category(category);
        if tools.is_empty() {
            continue;
        }
        let items: Vec<String> = tools
            .iter()
            .map(|tool| {
                if tool.description.is_empty() {
                    tool.name.clone()
                } else {
                    format!("{} - {}", tool.name, tool.description)
                }
            })
            .collect();

        let picked = MultiSelect::new()
            .with_prompt(format!("{} (space to toggle, enter to continue)", category.display_name()))
            .items(&items)
            .interact_opt()
            .map_err(|err| AppError::Prompt(err.to_string()))?;

        let Some(picked) = picked else {
            return Ok(None);
        };
        ids.extend(picked.into_iter().map(|index| tools[index].id.to_string()));
    }

    if ids.is_empty() {
        return Err(AppError::config_error("No tools selected"));
    }
    Ok(Some(ids))
}
