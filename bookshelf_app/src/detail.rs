use bookshelf_library::api::{Book, BookId, ReadingStatus};

use crate::persistence::LibraryClient;

/// Display model for the detail page. Optional sections carry `None` when
/// the underlying field is empty, so section visibility is data-driven.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDetailView {
    pub title: String,
    pub author: String,
    pub status: ReadingStatus,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub review: Option<String>,
    pub tags: Vec<String>,
    pub date_added: Option<String>,
}

impl BookDetailView {
    fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.display_author().to_string(),
            status: book.status,
            cover_image: non_empty(book.cover_image.as_deref()),
            description: non_empty(book.description.as_deref()),
            review: non_empty(book.review.as_deref()),
            tags: book
                .tags
                .iter()
                .filter(|tag| !tag.trim().is_empty())
                .cloned()
                .collect(),
            date_added: non_empty(book.date_added.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Found(BookDetailView),
    /// The caller redirects to the list view and notifies the user.
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusUpdateOutcome {
    Updated,
    /// Collection left untouched, no save attempted.
    BookNotFound,
    SaveFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation prompt; no I/O happened.
    Cancelled,
    /// The caller transitions to the list view.
    Deleted,
    SaveFailed,
}

/// Detail view controller, keyed by the book id taken from the page
/// addressing context. Every mutation re-loads the full collection first
/// and persists it wholesale; two racing sessions are last-writer-wins.
pub struct DetailController<C> {
    client: C,
}

impl<C: LibraryClient> DetailController<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn load(&self, book_id: BookId) -> LoadOutcome {
        let books = self.client.load().await;
        match books.iter().find(|book| book.id == book_id) {
            Some(book) => LoadOutcome::Found(BookDetailView::from_book(book)),
            None => {
                tracing::warn!("Book {} not found", book_id);
                LoadOutcome::NotFound
            }
        }
    }

    /// Re-loads, mutates only the status of the matching book and persists
    /// the full collection. No optimistic update; the caller reports the
    /// outcome after the save confirms.
    pub async fn update_status(
        &self,
        book_id: BookId,
        status: ReadingStatus,
    ) -> StatusUpdateOutcome {
        let mut books = self.client.load().await;
        let Some(book) = books.iter_mut().find(|book| book.id == book_id) else {
            tracing::warn!("Status update for missing book {}", book_id);
            return StatusUpdateOutcome::BookNotFound;
        };
        book.status = status;

        if self.client.save(&books).await {
            StatusUpdateOutcome::Updated
        } else {
            StatusUpdateOutcome::SaveFailed
        }
    }

    /// Deletes the book after explicit confirmation: re-load, filter out the
    /// id, persist the remainder.
    pub async fn delete(&self, book_id: BookId, confirmed: bool) -> DeleteOutcome {
        if !confirmed {
            return DeleteOutcome::Cancelled;
        }
        let mut books = self.client.load().await;
        books.retain(|book| book.id != book_id);

        if self.client.save(&books).await {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::SaveFailed
        }
    }
}
