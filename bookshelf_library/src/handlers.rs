use std::sync::Arc;

use actix_web::Error;
use actix_web::HttpResponse;
use actix_web::web::Data;
use paperclip::actix::{
    api_v2_operation,
    web::{self},
};

use crate::api::{ErrorResponse, GetBooksResponse, LibraryDocument, SaveLibraryResponse};
use crate::library_store::{LibraryStore, LibraryStoreError};

#[api_v2_operation]
pub async fn health() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().finish())
}

/// Never answers with a non-200 for "no data": an absent, corrupt or
/// unreadable document all collapse to an empty book list.
#[api_v2_operation]
pub async fn get_books(
    library_store: Data<Arc<dyn LibraryStore + Send + Sync>>,
) -> Result<HttpResponse, Error> {
    Ok(match library_store.load_document().await {
        Ok(document) => HttpResponse::Ok().json(GetBooksResponse {
            books: document.books,
        }),
        Err(LibraryStoreError::NotFound) => {
            tracing::debug!("No library document yet, returning empty list");
            HttpResponse::Ok().json(GetBooksResponse { books: vec![] })
        }
        Err(err) => {
            tracing::error!("Loading library document failed {}", err);
            HttpResponse::Ok().json(GetBooksResponse { books: vec![] })
        }
    })
}

#[api_v2_operation]
pub async fn save_library(
    library_store: Data<Arc<dyn LibraryStore + Send + Sync>>,
    document: web::Json<LibraryDocument>,
) -> Result<HttpResponse, Error> {
    Ok(
        match library_store.save_document(document.into_inner()).await {
            Ok(()) => HttpResponse::Ok().json(SaveLibraryResponse { success: true }),
            Err(err) => {
                tracing::error!("Saving library document failed {}", err);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: err.to_string(),
                })
            }
        },
    )
}
