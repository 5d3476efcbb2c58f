use bookshelf_library::api::Book;

use crate::grid::{self, GridModel};
use crate::persistence::LibraryClient;
use crate::search;

/// List page state: an immutable-per-render snapshot of the collection plus
/// an explicit reconciliation step driven by window refocus.
pub struct ListPage<C> {
    client: C,
    snapshot: Vec<Book>,
    last_fetched_len: Option<usize>,
}

impl<C: LibraryClient> ListPage<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            snapshot: vec![],
            last_fetched_len: None,
        }
    }

    /// Fetches the collection, drops entries failing the validity predicate
    /// and replaces the snapshot. Remembers the fetched (pre-filter) length
    /// for the refocus dirty check.
    pub async fn refresh(&mut self) -> &[Book] {
        let fetched = self.client.load().await;
        self.last_fetched_len = Some(fetched.len());
        self.snapshot = fetched.into_iter().filter(Book::is_displayable).collect();
        &self.snapshot
    }

    /// Refocus reconciliation: re-fetches and replaces the snapshot only when
    /// the collection length changed since the last fetch. A pure length
    /// check, so same-count edits made in another session are missed until
    /// the next explicit refresh.
    pub async fn handle_refocus(&mut self) -> bool {
        let fetched = self.client.load().await;
        match self.last_fetched_len {
            Some(len) if len == fetched.len() => false,
            _ => {
                tracing::debug!(
                    previous = ?self.last_fetched_len,
                    current = fetched.len(),
                    "Collection length changed, re-rendering"
                );
                self.last_fetched_len = Some(fetched.len());
                self.snapshot = fetched.into_iter().filter(Book::is_displayable).collect();
                true
            }
        }
    }

    pub fn snapshot(&self) -> &[Book] {
        &self.snapshot
    }

    /// Books visible for the given search query, in snapshot order.
    pub fn visible(&self, query: &str) -> Vec<Book> {
        search::search(&self.snapshot, query)
    }

    /// Grid layout model of the visible books.
    pub fn grid(&self, query: &str, columns: usize) -> GridModel {
        grid::layout(&self.visible(query), columns)
    }
}

#[cfg(test)]
mod list_page_tests {
    use std::sync::Arc;

    use bookshelf_library::api::Book;

    use super::*;
    use crate::grid::DEFAULT_COLUMNS;
    use crate::persistence::InMemoryLibraryClient;

    fn book(id: i64, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            ..Book::default()
        }
    }

    #[tokio::test]
    async fn test_refresh_filters_invalid_entries() {
        let client = Arc::new(InMemoryLibraryClient::with_books(vec![
            book(1, "Dune"),
            book(2, ""),
            book(3, "Emma"),
        ]));
        let mut page = ListPage::new(client);

        let snapshot = page.refresh().await;
        assert_eq!(
            snapshot.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[tokio::test]
    async fn test_refocus_with_unchanged_length_keeps_the_snapshot() {
        let client = Arc::new(InMemoryLibraryClient::with_books(vec![
            book(1, "Dune"),
            book(2, "Emma"),
        ]));
        let mut page = ListPage::new(client.clone());
        page.refresh().await;

        // Another session edits a title without changing the count;
        // the length check cannot see it.
        client.overwrite_books(vec![book(1, "Dune Messiah"), book(2, "Emma")]);

        assert!(!page.handle_refocus().await);
        assert_eq!(page.snapshot()[0].title, "Dune");
    }

    #[tokio::test]
    async fn test_refocus_with_changed_length_replaces_the_snapshot() {
        let client = Arc::new(InMemoryLibraryClient::with_books(vec![book(1, "Dune")]));
        let mut page = ListPage::new(client.clone());
        page.refresh().await;

        client.overwrite_books(vec![book(1, "Dune"), book(2, "Emma")]);

        assert!(page.handle_refocus().await);
        assert_eq!(page.snapshot().len(), 2);
    }

    #[tokio::test]
    async fn test_refocus_before_any_refresh_loads() {
        let client = Arc::new(InMemoryLibraryClient::with_books(vec![book(1, "Dune")]));
        let mut page = ListPage::new(client);

        assert!(page.handle_refocus().await);
        assert_eq!(page.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_visible_and_grid_follow_the_query() {
        let client = Arc::new(InMemoryLibraryClient::with_books(vec![
            book(1, "Dune"),
            book(2, "Emma"),
        ]));
        let mut page = ListPage::new(client);
        page.refresh().await;

        let visible = page.visible("dune");
        assert_eq!(visible.len(), 1);

        match page.grid("dune", DEFAULT_COLUMNS) {
            GridModel::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0][0].book_id(), 1);
            }
            GridModel::Empty => panic!("Expected rows"),
        }

        // a query matching nothing lays out as the empty placeholder
        assert_eq!(page.grid("tolstoy", DEFAULT_COLUMNS), GridModel::Empty);
    }
}
