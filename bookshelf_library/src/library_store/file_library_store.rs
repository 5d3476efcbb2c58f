use std::path::PathBuf;

use crate::api::LibraryDocument;
use crate::library_store::{LibraryStore, LibraryStoreError};

/// Whole-file JSON storage. Reads and writes are not serialized against
/// concurrent writers; expected usage is single-user, single-session.
pub struct FileLibraryStore {
    path: PathBuf,
}

impl FileLibraryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl LibraryStore for FileLibraryStore {
    async fn load_document(&self) -> Result<LibraryDocument, LibraryStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(LibraryStoreError::NotFound)
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save_document(&self, document: LibraryDocument) -> Result<(), LibraryStoreError> {
        let bytes = serde_json::to_vec_pretty(&document)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
