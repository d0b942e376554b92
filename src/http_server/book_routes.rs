//! Book Catalog HTTP Routes
//!
//! Endpoints for adding, listing, fetching, updating, and deleting
//! books. Every handler answers with the response envelope.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::catalog::{BookDraft, BookStore, CatalogError, ListFilter};
use crate::http_server::response::Envelope;
use crate::observability::logger;

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
pub struct CatalogState {
    pub store: BookStore,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            store: BookStore::new(),
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Request Types
// ==================

/// Raw listing query parameters.
///
/// `reading` and `finished` stay strings here; the coercion into
/// booleans is an explicit parse step in [`ListFilter::from_query`].
#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

// ==================
// Book Routes
// ==================

/// Create book catalog routes
pub fn book_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/books", post(add_book_handler))
        .route("/books", get(list_books_handler))
        .route("/books/{id}", get(get_book_handler))
        .route("/books/{id}", put(update_book_handler))
        .route("/books/{id}", delete(delete_book_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn add_book_handler(
    State(state): State<Arc<CatalogState>>,
    Json(draft): Json<BookDraft>,
) -> (StatusCode, Json<Envelope>) {
    match state.store.add(draft) {
        Ok(id) => {
            logger::info("book_added", &[("id", id.as_str())]);
            (
                StatusCode::CREATED,
                Json(Envelope::success_with(
                    "Book added successfully",
                    json!({ "bookId": id }),
                )),
            )
        }
        Err(CatalogError::Internal(detail)) => {
            logger::error("book_add_failed", &[("detail", detail.as_str())]);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::error("Book could not be added")),
            )
        }
        Err(err) => {
            logger::warn("book_rejected", &[("op", "add"), ("reason", &err.to_string())]);
            (
                err.status_code(),
                Json(Envelope::fail(format!("Failed to add book. {}", err))),
            )
        }
    }
}

async fn list_books_handler(
    State(state): State<Arc<CatalogState>>,
    Query(query): Query<ListBooksQuery>,
) -> (StatusCode, Json<Envelope>) {
    let filter = ListFilter::from_query(query.name, query.reading, query.finished);

    match state.store.list(&filter) {
        Ok(books) => (
            StatusCode::OK,
            Json(Envelope::success(json!({ "books": books }))),
        ),
        Err(err) => {
            logger::error("book_list_failed", &[("detail", &err.to_string())]);
            (err.status_code(), Json(Envelope::error(err.to_string())))
        }
    }
}

async fn get_book_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Envelope>) {
    match state.store.get(&id) {
        Ok(book) => (
            StatusCode::OK,
            Json(Envelope::success(json!({ "book": book }))),
        ),
        Err(CatalogError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(Envelope::fail("Book not found")),
        ),
        Err(err) => {
            logger::error("book_get_failed", &[("detail", &err.to_string())]);
            (err.status_code(), Json(Envelope::error(err.to_string())))
        }
    }
}

async fn update_book_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
    Json(draft): Json<BookDraft>,
) -> (StatusCode, Json<Envelope>) {
    match state.store.update(&id, draft) {
        Ok(()) => {
            logger::info("book_updated", &[("id", id.as_str())]);
            (
                StatusCode::OK,
                Json(Envelope::success_message("Book updated successfully")),
            )
        }
        Err(err @ CatalogError::Internal(_)) => {
            logger::error("book_update_failed", &[("detail", &err.to_string())]);
            (err.status_code(), Json(Envelope::error(err.to_string())))
        }
        Err(err) => {
            logger::warn(
                "book_rejected",
                &[("id", id.as_str()), ("op", "update"), ("reason", &err.to_string())],
            );
            (
                err.status_code(),
                Json(Envelope::fail(format!("Failed to update book. {}", err))),
            )
        }
    }
}

async fn delete_book_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Envelope>) {
    match state.store.delete(&id) {
        Ok(()) => {
            logger::info("book_deleted", &[("id", id.as_str())]);
            (
                StatusCode::OK,
                Json(Envelope::success_message("Book deleted successfully")),
            )
        }
        Err(err @ CatalogError::Internal(_)) => {
            logger::error("book_delete_failed", &[("detail", &err.to_string())]);
            (err.status_code(), Json(Envelope::error(err.to_string())))
        }
        Err(err) => {
            logger::warn(
                "book_rejected",
                &[("id", id.as_str()), ("op", "delete"), ("reason", &err.to_string())],
            );
            (
                err.status_code(),
                Json(Envelope::fail(format!("Failed to delete book. {}", err))),
            )
        }
    }
}
