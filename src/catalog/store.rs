//! # Book Store
//!
//! The in-memory catalog: an insertion-ordered collection of books
//! behind a lock, with the five operations the HTTP layer exposes.

use std::sync::RwLock;

use super::book::{generate_book_id, now_timestamp, Book, BookDraft, BookSummary};
use super::errors::{CatalogError, CatalogResult};
use super::filter::ListFilter;

/// In-memory book store.
///
/// Records live for the lifetime of the process and keep their
/// insertion order. Axum serves requests concurrently, so the lock
/// serializes every operation against the shared collection.
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }

    /// Add a book built from the draft, returning the generated id.
    ///
    /// Validates the draft, then appends the new record and confirms it
    /// landed in the store before reporting success.
    pub fn add(&self, draft: BookDraft) -> CatalogResult<String> {
        let name = validate_draft(&draft)?;

        let mut books = self.write_lock()?;

        // Id uniqueness is guaranteed under the write lock
        let id = loop {
            let candidate = generate_book_id();
            if !books.iter().any(|b| b.id == candidate) {
                break candidate;
            }
        };

        let now = now_timestamp();
        let finished = draft.is_finished();

        books.push(Book {
            id: id.clone(),
            name,
            year: draft.year,
            author: draft.author,
            summary: draft.summary,
            publisher: draft.publisher,
            page_count: draft.page_count,
            read_page: draft.read_page,
            finished,
            reading: draft.reading,
            inserted_at: now.clone(),
            updated_at: now,
        });

        if !books.iter().any(|b| b.id == id) {
            return Err(CatalogError::internal("book missing after append"));
        }

        Ok(id)
    }

    /// List books passing the filter, projected to id/name/publisher,
    /// in insertion order.
    pub fn list(&self, filter: &ListFilter) -> CatalogResult<Vec<BookSummary>> {
        let books = self.read_lock()?;

        Ok(books
            .iter()
            .filter(|b| filter.matches(b))
            .map(BookSummary::from)
            .collect())
    }

    /// Get the full record for an id
    pub fn get(&self, id: &str) -> CatalogResult<Book> {
        let books = self.read_lock()?;

        books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    /// Replace every field of the record except `id` and `inserted_at`.
    ///
    /// The draft is validated before the id is looked up, so a bad
    /// payload against an unknown id still reports the validation error.
    pub fn update(&self, id: &str, draft: BookDraft) -> CatalogResult<()> {
        let name = validate_draft(&draft)?;

        let mut books = self.write_lock()?;

        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(CatalogError::NotFound)?;

        let finished = draft.is_finished();

        book.name = name;
        book.year = draft.year;
        book.author = draft.author;
        book.summary = draft.summary;
        book.publisher = draft.publisher;
        book.page_count = draft.page_count;
        book.read_page = draft.read_page;
        book.finished = finished;
        book.reading = draft.reading;
        book.updated_at = now_timestamp();

        Ok(())
    }

    /// Remove the record for an id, keeping the order of the rest
    pub fn delete(&self, id: &str) -> CatalogResult<()> {
        let mut books = self.write_lock()?;

        let index = books
            .iter()
            .position(|b| b.id == id)
            .ok_or(CatalogError::NotFound)?;

        books.remove(index);

        Ok(())
    }

    /// Number of stored books
    pub fn len(&self) -> usize {
        self.books.read().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_lock(&self) -> CatalogResult<std::sync::RwLockReadGuard<'_, Vec<Book>>> {
        self.books
            .read()
            .map_err(|_| CatalogError::internal("book store lock poisoned"))
    }

    fn write_lock(&self) -> CatalogResult<std::sync::RwLockWriteGuard<'_, Vec<Book>>> {
        self.books
            .write()
            .map_err(|_| CatalogError::internal("book store lock poisoned"))
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the two input checks, in order, returning the validated name.
///
/// Name presence is checked before the page counts, so both failure
/// messages are deterministic for a given payload.
fn validate_draft(draft: &BookDraft) -> CatalogResult<String> {
    let name = match &draft.name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => return Err(CatalogError::validation("Please provide a book name")),
    };

    if draft.read_page > draft.page_count {
        return Err(CatalogError::validation(
            "readPage must not be greater than pageCount",
        ));
    }

    Ok(name)
}
