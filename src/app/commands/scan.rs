//! Scan command: writes the script that snapshots a Mac.

use tracing::info;

use super::{OutputTarget, emit};
use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ScriptWriter, SelectionStore, ToolCatalog};

/// Default scan script file name.
pub const DEFAULT_OUTPUT: &str = "baseline-scan.sh";

pub fn execute<C, S, W>(ctx: &AppContext<C, S, W>, output: OutputTarget) -> Result<(), AppError>
where
    C: ToolCatalog,
    S: SelectionStore,
    W: ScriptWriter,
{
    let script = ctx.generator().scan_script();
    emit(ctx.scripts(), &output, &script)?;
    info!(output = %output, "Generated scan script");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generate::SNAPSHOT_FILE;
    use crate::testing::test_context;

    #[test]
    fn writes_scan_script() {
        let ctx = test_context();
        execute(&ctx, OutputTarget::from_arg(None, DEFAULT_OUTPUT)).unwrap();

        let script = ctx.scripts().get(DEFAULT_OUTPUT).unwrap();
        assert!(script.starts_with("#!/bin/bash"));
        assert!(script.contains(SNAPSHOT_FILE));
    }
}
