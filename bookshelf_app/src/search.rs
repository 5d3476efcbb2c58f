use bookshelf_library::api::Book;

/// Case-insensitive substring search over title, author and tags.
///
/// An empty or whitespace-only query matches everything. Results keep the
/// input order; there is no ranking.
pub fn search(books: &[Book], query: &str) -> Vec<Book> {
    let query = query.trim();
    if query.is_empty() {
        return books.to_vec();
    }
    let needle = query.to_lowercase();
    books
        .iter()
        .filter(|book| matches_query(book, &needle))
        .cloned()
        .collect()
}

fn matches_query(book: &Book, needle: &str) -> bool {
    if book.title.to_lowercase().contains(needle) {
        return true;
    }
    if let Some(author) = book.author.as_deref() {
        if author.to_lowercase().contains(needle) {
            return true;
        }
    }
    book.tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(needle))
}
