use bookshelf_library::api::{Book, BookId, ReadingStatus};

use crate::persistence::LibraryClient;

/// Raw form input for a new book. Everything arrives as text; `submit`
/// does the trimming and splitting.
#[derive(Debug, Clone, Default)]
pub struct NewBookForm {
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_image: String,
    pub review: String,
    pub tags: String,
    pub status: ReadingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The caller navigates to the list view.
    Created { id: BookId },
    /// Title empty after trimming; reported inline, no network call made.
    InvalidTitle,
    /// The caller keeps the form populated for retry.
    SaveFailed,
}

/// Splits the tags field on commas, trims each tag and drops empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ids are creation timestamps in milliseconds. Two creations inside the
/// same millisecond would collide, so the candidate is bumped upward past
/// any id already present in the loaded collection.
pub fn assign_book_id(existing: &[Book], candidate: BookId) -> BookId {
    let mut id = candidate;
    while existing.iter().any(|book| book.id == id) {
        id += 1;
    }
    id
}

pub struct CreateController<C> {
    client: C,
}

impl<C: LibraryClient> CreateController<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn submit(&self, form: &NewBookForm) -> CreateOutcome {
        let title = form.title.trim();
        if title.is_empty() {
            return CreateOutcome::InvalidTitle;
        }

        let mut books = self.client.load().await;
        let id = assign_book_id(&books, chrono::Utc::now().timestamp_millis());
        books.push(Book {
            id,
            title: title.to_string(),
            author: optional_field(&form.author),
            description: optional_field(&form.description),
            cover_image: optional_field(&form.cover_image),
            review: optional_field(&form.review),
            tags: parse_tags(&form.tags),
            status: form.status,
            date_added: Some(chrono::Utc::now().to_rfc3339()),
        });

        if self.client.save(&books).await {
            tracing::info!("Added book {}", id);
            CreateOutcome::Created { id }
        } else {
            CreateOutcome::SaveFailed
        }
    }
}

fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
