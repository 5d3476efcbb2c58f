use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

pub type BookId = i64;

pub const DEFAULT_LIBRARY_NAME: &str = "My Library";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema,
)]
#[serde(from = "String")]
/// Reading status of a book. Unknown strings found in a stored document
/// fall back to `WantToRead`, same as an absent field.
pub enum ReadingStatus {
    #[default]
    #[serde(rename = "want to read")]
    WantToRead,
    #[serde(rename = "reading")]
    Reading,
    #[serde(rename = "read")]
    Read,
}

impl From<String> for ReadingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "reading" => ReadingStatus::Reading,
            "read" => ReadingStatus::Read,
            _ => ReadingStatus::WantToRead,
        }
    }
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReadingStatus::WantToRead => "want to read",
            ReadingStatus::Reading => "reading",
            ReadingStatus::Read => "read",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
/// One library entry. Every field deserializes with a default so a single
/// malformed entry never makes the whole document unreadable; validity
/// (non-empty trimmed title) is checked by the consumers that care.
pub struct Book {
    #[serde(default)]
    pub id: BookId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: ReadingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
}

impl Book {
    /// Validity predicate used by the list page filter and the grid layout.
    pub fn is_displayable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Author as shown to the user.
    pub fn display_author(&self) -> &str {
        self.author
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
/// The single persisted JSON object holding metadata and the full book
/// collection. `total_books == books.len()` holds at write time only,
/// it is never enforced on read.
pub struct LibraryDocument {
    #[serde(default = "default_library_name")]
    pub library: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub total_books: usize,
    #[serde(default)]
    pub books: Vec<Book>,
}

fn default_library_name() -> String {
    DEFAULT_LIBRARY_NAME.to_string()
}

impl LibraryDocument {
    /// Builds a fresh document for a full-collection save.
    pub fn for_save(library: &str, books: Vec<Book>) -> Self {
        LibraryDocument {
            library: library.to_string(),
            last_updated: chrono::Utc::now().to_rfc3339(),
            total_books: books.len(),
            books,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
pub struct GetBooksResponse {
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
pub struct SaveLibraryResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Apiv2Schema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod api_tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_want_to_read_when_absent_or_unknown() {
        let book: Book = serde_json::from_str(r#"{"id": 1, "title": "Dune"}"#)
            .expect("Failed to parse book");
        assert_eq!(book.status, ReadingStatus::WantToRead);

        let book: Book =
            serde_json::from_str(r#"{"id": 1, "title": "Dune", "status": "on loan"}"#)
                .expect("Failed to parse book");
        assert_eq!(book.status, ReadingStatus::WantToRead);

        let book: Book =
            serde_json::from_str(r#"{"id": 1, "title": "Dune", "status": "reading"}"#)
                .expect("Failed to parse book");
        assert_eq!(book.status, ReadingStatus::Reading);
    }

    #[test]
    fn test_status_serializes_to_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ReadingStatus::WantToRead).unwrap(),
            r#""want to read""#
        );
        assert_eq!(ReadingStatus::Read.to_string(), "read");
    }

    #[test]
    fn test_malformed_entry_does_not_poison_the_document() {
        let doc: LibraryDocument = serde_json::from_str(
            r#"{
                "library": "My Library",
                "lastUpdated": "2024-01-01T00:00:00Z",
                "totalBooks": 2,
                "books": [{"id": 1, "title": "Dune"}, {"id": 2}]
            }"#,
        )
        .expect("Failed to parse document");
        assert_eq!(doc.books.len(), 2);
        assert!(doc.books[0].is_displayable());
        assert!(!doc.books[1].is_displayable());
    }

    #[test]
    fn test_display_author_falls_back_to_unknown() {
        let mut book = Book {
            id: 1,
            title: "Dune".to_string(),
            ..Book::default()
        };
        assert_eq!(book.display_author(), "Unknown");
        book.author = Some("  ".to_string());
        assert_eq!(book.display_author(), "Unknown");
        book.author = Some("Herbert".to_string());
        assert_eq!(book.display_author(), "Herbert");
    }

    #[test]
    fn test_for_save_sets_total_books() {
        let books = vec![
            Book {
                id: 1,
                title: "Dune".to_string(),
                ..Book::default()
            },
            Book {
                id: 2,
                title: "Emma".to_string(),
                ..Book::default()
            },
        ];
        let doc = LibraryDocument::for_save(DEFAULT_LIBRARY_NAME, books);
        assert_eq!(doc.total_books, doc.books.len());
        assert!(!doc.last_updated.is_empty());
    }

    #[test]
    fn test_book_wire_format_is_camel_case() {
        let book = Book {
            id: 5,
            title: "Dune".to_string(),
            cover_image: Some("http://example.com/dune.jpg".to_string()),
            date_added: Some("2024-01-01T00:00:00Z".to_string()),
            ..Book::default()
        };
        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("coverImage").is_some());
        assert!(json.get("dateAdded").is_some());
        assert!(json.get("cover_image").is_none());
    }
}
