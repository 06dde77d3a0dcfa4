//! Restore command: installer script from scanned snapshot text.

use std::path::Path;

use tracing::{info, warn};

use super::{OutputTarget, emit, read_input};
use crate::app::AppContext;
use crate::domain::{AppError, SnapshotFormat, load_snapshot, snapshot_or_legacy};
use crate::ports::{ScriptWriter, SelectionStore, ToolCatalog};

/// Default restore script file name.
pub const DEFAULT_OUTPUT: &str = "baseline-setup.sh";

#[derive(Debug, Clone)]
pub struct RestoreOptions {
    pub output: OutputTarget,
    /// Fail on snapshot text that cannot be read instead of restoring what remains.
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct RestoreOutcome {
    pub output: OutputTarget,
    pub format: SnapshotFormat,
    pub hostname: String,
    pub formulae: usize,
    pub casks: usize,
    /// Why the snapshot was only partly usable.
    pub warning: Option<String>,
}

pub fn execute<C, S, W>(
    ctx: &AppContext<C, S, W>,
    snapshot_path: &Path,
    options: RestoreOptions,
) -> Result<RestoreOutcome, AppError>
where
    C: ToolCatalog,
    S: SelectionStore,
    W: ScriptWriter,
{
    let raw = read_input(snapshot_path)?;

    let mut warning = None;
    let snapshot = match load_snapshot(&raw) {
        Ok(snapshot) => snapshot,
        Err(err) if options.strict => return Err(err.into()),
        Err(err) => {
            warn!(error = %err, "Snapshot is not fully readable; restoring what remains");
            warning = Some(err.to_string());
            snapshot_or_legacy(&raw)
        }
    };

    let script = ctx.generator().restore_script(&snapshot);
    emit(ctx.scripts(), &options.output, &script)?;
    info!(output = %options.output, format = ?snapshot.format, "Generated restore script");

    Ok(RestoreOutcome {
        output: options.output,
        format: snapshot.format,
        hostname: snapshot.meta.hostname.clone(),
        formulae: snapshot.formula_count(),
        casks: snapshot.cask_count(),
        warning,
    })
}
