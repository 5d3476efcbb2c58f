use crate::api::LibraryDocument;
use crate::library_store::{LibraryStore, LibraryStoreError};

#[derive(Default)]
pub struct InMemoryLibraryStore {
    document: parking_lot::RwLock<Option<LibraryDocument>>,
}

#[async_trait::async_trait]
impl LibraryStore for InMemoryLibraryStore {
    async fn load_document(&self) -> Result<LibraryDocument, LibraryStoreError> {
        self.document
            .read()
            .clone()
            .ok_or(LibraryStoreError::NotFound)
    }

    async fn save_document(&self, document: LibraryDocument) -> Result<(), LibraryStoreError> {
        *self.document.write() = Some(document);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_library_store_tests {
    use super::*;
    use crate::api::{Book, LibraryDocument, DEFAULT_LIBRARY_NAME};

    #[tokio::test]
    async fn test_empty_store_is_not_found() {
        let store = InMemoryLibraryStore::default();
        let result = store.load_document().await;
        assert!(matches!(result, Err(LibraryStoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_save_replaces_the_whole_document() {
        let store = InMemoryLibraryStore::default();

        let first = LibraryDocument::for_save(
            DEFAULT_LIBRARY_NAME,
            vec![Book {
                id: 1,
                title: "Dune".to_string(),
                ..Book::default()
            }],
        );
        store
            .save_document(first)
            .await
            .expect("Failed to save document");

        let second = LibraryDocument::for_save(
            DEFAULT_LIBRARY_NAME,
            vec![Book {
                id: 2,
                title: "Emma".to_string(),
                ..Book::default()
            }],
        );
        store
            .save_document(second.clone())
            .await
            .expect("Failed to save document");

        let loaded = store.load_document().await.expect("Failed to load document");
        assert_eq!(loaded, second);
    }
}
