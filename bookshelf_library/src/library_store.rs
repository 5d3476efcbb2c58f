pub use file_library_store::FileLibraryStore;
pub use in_memory_library_store::InMemoryLibraryStore;

use crate::api::LibraryDocument;

mod file_library_store;
mod in_memory_library_store;

#[derive(thiserror::Error, Debug)]
pub enum LibraryStoreError {
    #[error("Library document not found")]
    NotFound,

    #[error("Failed to parse library document: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Storage io failure: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait::async_trait]
pub trait LibraryStore {
    /// Reads the whole persisted library document.
    async fn load_document(&self) -> Result<LibraryDocument, LibraryStoreError>;
    /// Replaces the whole persisted library document. There are no partial
    /// updates; every write overwrites everything.
    async fn save_document(&self, document: LibraryDocument) -> Result<(), LibraryStoreError>;
}
