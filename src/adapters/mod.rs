mod catalog_embedded;
mod script_filesystem;
mod selection_filesystem;

pub use catalog_embedded::EmbeddedToolCatalog;
pub use script_filesystem::FilesystemScriptWriter;
pub use selection_filesystem::FilesystemSelectionStore;
