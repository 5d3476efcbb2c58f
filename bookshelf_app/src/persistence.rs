use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use bookshelf_library::api::Book;
use bookshelf_library::client::BookshelfClient;

/// The seam the controllers talk through. Both operations fail soft, matching
/// the contract of [`BookshelfClient`]: `load` never errors (an unreachable
/// or broken backend reads as an empty shelf) and `save` reports acceptance
/// as a plain flag.
#[async_trait::async_trait]
pub trait LibraryClient: Send + Sync {
    /// Loads the complete book collection.
    async fn load(&self) -> Vec<Book>;
    /// Replaces the stored collection with `books`, returns acceptance.
    async fn save(&self, books: &[Book]) -> bool;
}

#[async_trait::async_trait]
impl LibraryClient for BookshelfClient {
    async fn load(&self) -> Vec<Book> {
        BookshelfClient::load(self).await
    }

    async fn save(&self, books: &[Book]) -> bool {
        BookshelfClient::save(self, books).await
    }
}

#[async_trait::async_trait]
impl<T: LibraryClient + ?Sized> LibraryClient for Arc<T> {
    async fn load(&self) -> Vec<Book> {
        (**self).load().await
    }

    async fn save(&self, books: &[Book]) -> bool {
        (**self).save(books).await
    }
}

/// In-memory stand-in for the HTTP client. Used by controller tests and by
/// anything that wants the full flow without a running server.
#[derive(Default)]
pub struct InMemoryLibraryClient {
    books: parking_lot::RwLock<Vec<Book>>,
    fail_saves: AtomicBool,
    save_count: AtomicUsize,
}

impl InMemoryLibraryClient {
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: parking_lot::RwLock::new(books),
            ..Self::default()
        }
    }

    /// Makes every subsequent save report failure without touching the data.
    pub fn set_save_failure(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::Relaxed);
    }

    pub fn books(&self) -> Vec<Book> {
        self.books.read().clone()
    }

    /// Replaces the stored collection directly, bypassing `save` accounting.
    /// Lets tests model edits made by another session.
    pub fn overwrite_books(&self, books: Vec<Book>) {
        *self.books.write() = books;
    }

    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl LibraryClient for InMemoryLibraryClient {
    async fn load(&self) -> Vec<Book> {
        self.books.read().clone()
    }

    async fn save(&self, books: &[Book]) -> bool {
        self.save_count.fetch_add(1, Ordering::Relaxed);
        if self.fail_saves.load(Ordering::Relaxed) {
            return false;
        }
        *self.books.write() = books.to_vec();
        true
    }
}
