mod script_writer;
mod selection_store;
mod tool_catalog;

pub use script_writer::ScriptWriter;
pub use selection_store::SelectionStore;
pub use tool_catalog::ToolCatalog;
