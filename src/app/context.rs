use crate::domain::ScriptGenerator;
use crate::ports::{ScriptWriter, SelectionStore, ToolCatalog};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: ToolCatalog, S: SelectionStore, W: ScriptWriter> {
    catalog: C,
    selections: S,
    scripts: W,
    generator: ScriptGenerator,
}

impl<C: ToolCatalog, S: SelectionStore, W: ScriptWriter> AppContext<C, S, W> {
    pub fn new(catalog: C, selections: S, scripts: W, generator: ScriptGenerator) -> Self {
        Self { catalog, selections, scripts, generator }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn selections(&self) -> &S {
        &self.selections
    }

    pub fn scripts(&self) -> &W {
        &self.scripts
    }

    pub fn generator(&self) -> &ScriptGenerator {
        &self.generator
    }
}
