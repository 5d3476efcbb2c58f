use anyhow::Context;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::api::{Book, GetBooksResponse, LibraryDocument, DEFAULT_LIBRARY_NAME};

/// Persistence client for the bookshelf service. Both operations fail soft:
/// `load` collapses every transport or parse error to an empty collection
/// and `save` collapses them to `false`, so callers never see an `Err`.
pub struct BookshelfClient {
    url: String,
    library_name: String,
    client: ClientWithMiddleware,
}

impl BookshelfClient {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        Self::with_library_name(url, DEFAULT_LIBRARY_NAME)
    }

    pub fn with_library_name(url: &str, library_name: &str) -> anyhow::Result<Self> {
        let reqwest_client = reqwest::Client::builder()
            .build()
            .context("Failed to build reqwest client")?;
        let client = ClientBuilder::new(reqwest_client)
            // Insert the tracing middleware
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            url: url.to_string(),
            library_name: library_name.to_string(),
            client,
        })
    }

    /// Loads the full book collection. Any failure yields an empty list.
    pub async fn load(&self) -> Vec<Book> {
        match self.try_load().await {
            Ok(books) => books,
            Err(err) => {
                tracing::warn!("Loading books failed, treating as empty: {}", err);
                vec![]
            }
        }
    }

    async fn try_load(&self) -> anyhow::Result<Vec<Book>> {
        let response = self
            .client
            .get(format!("{}/books", self.url))
            .send()
            .await
            .context("Failed to get books")?;

        if !response.status().is_success() {
            anyhow::bail!("Get books returned status {}", response.status());
        }

        let body: GetBooksResponse = response
            .json()
            .await
            .context("Failed to parse books response")?;
        Ok(body.books)
    }

    /// Saves the complete desired collection, replacing whatever is stored.
    /// Returns whether the server accepted the write.
    pub async fn save(&self, books: &[Book]) -> bool {
        let document = LibraryDocument::for_save(&self.library_name, books.to_vec());
        match self.try_save(&document).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Saving books failed: {}", err);
                false
            }
        }
    }

    async fn try_save(&self, document: &LibraryDocument) -> anyhow::Result<()> {
        let response = self
            .client
            .post(format!("{}/books", self.url))
            .json(document)
            .send()
            .await
            .context("Failed to post library document")?;

        if !response.status().is_success() {
            anyhow::bail!("Save returned status {}", response.status());
        }
        Ok(())
    }
}
