mod memory_script_writer;
mod memory_selection_store;

pub use memory_script_writer::MemoryScriptWriter;
pub use memory_selection_store::MemorySelectionStore;

use crate::adapters::EmbeddedToolCatalog;
use crate::app::AppContext;
use crate::domain::ScriptGenerator;

pub type TestContext = AppContext<EmbeddedToolCatalog, MemorySelectionStore, MemoryScriptWriter>;

/// Context over the embedded catalog with in-memory stores.
pub fn test_context() -> TestContext {
    AppContext::new(
        EmbeddedToolCatalog::new().expect("embedded catalog parses"),
        MemorySelectionStore::new(),
        MemoryScriptWriter::new(),
        ScriptGenerator::default(),
    )
}
