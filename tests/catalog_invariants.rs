//! Catalog Invariant Tests
//!
//! Store-level properties of the book catalog:
//! - `finished` always equals `readPage == pageCount` after a write
//! - Rejected input never mutates the store
//! - Listing projects to id/name/publisher in insertion order
//! - Update preserves id and insertedAt, replaces everything else
//! - Delete keeps the relative order of the remaining records

use bookshelf::catalog::{BookDraft, BookStore, CatalogError, ListFilter, BOOK_ID_LEN};

// =============================================================================
// Helper Functions
// =============================================================================

fn draft(name: &str, page_count: i64, read_page: i64) -> BookDraft {
    BookDraft {
        name: Some(name.to_string()),
        page_count,
        read_page,
        ..Default::default()
    }
}

fn full_draft(name: &str) -> BookDraft {
    BookDraft {
        name: Some(name.to_string()),
        year: Some(1984),
        author: Some("An Author".to_string()),
        summary: Some("A summary".to_string()),
        publisher: Some("A Publisher".to_string()),
        page_count: 320,
        read_page: 100,
        reading: true,
    }
}

// =============================================================================
// Derived State Tests
// =============================================================================

/// For every valid input, the stored `finished` flag equals
/// `readPage == pageCount`.
#[test]
fn test_finished_is_derived_from_page_counts() {
    let store = BookStore::new();

    for (pages, read) in [(100, 100), (100, 50), (0, 0), (1, 0)] {
        let id = store.add(draft("Sample", pages, read)).unwrap();
        let book = store.get(&id).unwrap();
        assert_eq!(book.finished, read == pages);
    }
}

/// The derived flag is recomputed on update, both directions.
#[test]
fn test_finished_recomputed_on_update() {
    let store = BookStore::new();
    let id = store.add(draft("Sample", 100, 100)).unwrap();
    assert!(store.get(&id).unwrap().finished);

    store.update(&id, draft("Sample", 100, 40)).unwrap();
    assert!(!store.get(&id).unwrap().finished);

    store.update(&id, draft("Sample", 100, 100)).unwrap();
    assert!(store.get(&id).unwrap().finished);
}

// =============================================================================
// Rejection Tests
// =============================================================================

/// Missing name is rejected and leaves the store untouched.
#[test]
fn test_missing_name_does_not_mutate_store() {
    let store = BookStore::new();

    let result = store.add(BookDraft {
        page_count: 100,
        read_page: 10,
        ..Default::default()
    });

    assert!(matches!(result, Err(CatalogError::Validation(_))));
    assert_eq!(store.len(), 0);
}

/// readPage beyond pageCount is rejected and leaves the store untouched.
#[test]
fn test_read_page_overflow_does_not_mutate_store() {
    let store = BookStore::new();

    let result = store.add(draft("Sample", 100, 150));

    assert!(matches!(result, Err(CatalogError::Validation(_))));
    assert_eq!(store.len(), 0);
}

/// A failed update against a real record leaves that record untouched.
#[test]
fn test_rejected_update_leaves_record_intact() {
    let store = BookStore::new();
    let id = store.add(draft("Original", 100, 10)).unwrap();
    let before = store.get(&id).unwrap();

    let result = store.update(&id, draft("Replacement", 100, 150));
    assert!(matches!(result, Err(CatalogError::Validation(_))));

    assert_eq!(store.get(&id).unwrap(), before);
}

/// Updating an id that does not exist alters nothing.
#[test]
fn test_update_unknown_id_does_not_alter_store() {
    let store = BookStore::new();
    let id = store.add(full_draft("Kept")).unwrap();
    let before = store.get(&id).unwrap();

    let result = store.update("0000000000000000", draft("Other", 10, 0));
    assert!(matches!(result, Err(CatalogError::NotFound)));

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&id).unwrap(), before);
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

/// A stored record equals the input plus the generated fields.
#[test]
fn test_get_after_add_returns_input_plus_generated_fields() {
    let store = BookStore::new();
    let id = store.add(full_draft("Round Trip")).unwrap();

    let book = store.get(&id).unwrap();
    assert_eq!(book.id.len(), BOOK_ID_LEN);
    assert_eq!(book.name, "Round Trip");
    assert_eq!(book.year, Some(1984));
    assert_eq!(book.author.as_deref(), Some("An Author"));
    assert_eq!(book.summary.as_deref(), Some("A summary"));
    assert_eq!(book.publisher.as_deref(), Some("A Publisher"));
    assert_eq!(book.page_count, 320);
    assert_eq!(book.read_page, 100);
    assert!(!book.finished);
    assert!(book.reading);
    assert_eq!(book.inserted_at, book.updated_at);
}

/// Update replaces every field except id and insertedAt, and advances
/// updatedAt.
#[test]
fn test_update_replaces_all_but_identity() {
    let store = BookStore::new();
    let id = store.add(full_draft("Before")).unwrap();
    let before = store.get(&id).unwrap();

    std::thread::sleep(std::time::Duration::from_millis(2));
    store.update(&id, draft("After", 50, 50)).unwrap();

    let after = store.get(&id).unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.inserted_at, before.inserted_at);
    assert_eq!(after.name, "After");
    assert_eq!(after.year, None);
    assert_eq!(after.author, None);
    assert_eq!(after.page_count, 50);
    assert!(after.finished);
    assert!(!after.reading);
    assert!(after.updated_at > before.updated_at);
}

// =============================================================================
// Listing Tests
// =============================================================================

/// Unfiltered listing returns every record in insertion order.
#[test]
fn test_list_returns_all_in_insertion_order() {
    let store = BookStore::new();
    let ids: Vec<String> = ["First", "Second", "Third"]
        .iter()
        .map(|n| store.add(draft(n, 10, 0)).unwrap())
        .collect();

    let listed = store.list(&ListFilter::default()).unwrap();
    let listed_ids: Vec<&str> = listed.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        listed_ids,
        ids.iter().map(String::as_str).collect::<Vec<_>>()
    );
}

/// Name filtering is a case-insensitive substring match.
#[test]
fn test_list_name_filter() {
    let store = BookStore::new();
    store.add(draft("War and Peace", 10, 0)).unwrap();
    store.add(draft("The Art of War", 10, 0)).unwrap();
    store.add(draft("Dune", 10, 0)).unwrap();

    let filter = ListFilter::from_query(Some("war".to_string()), None, None);
    let listed = store.list(&filter).unwrap();

    let names: Vec<&str> = listed.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["War and Peace", "The Art of War"]);
}

/// End-to-end scenario: two books, one finished, filtered by the
/// coerced `finished=1` flag.
#[test]
fn test_finished_filter_scenario() {
    let store = BookStore::new();
    store.add(draft("A", 100, 100)).unwrap();
    store.add(draft("B", 100, 50)).unwrap();

    let finished = ListFilter::from_query(None, None, Some("1".to_string()));
    let listed = store.list(&finished).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "A");

    let unfinished = ListFilter::from_query(None, None, Some("0".to_string()));
    let listed = store.list(&unfinished).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "B");
}

// =============================================================================
// Deletion Tests
// =============================================================================

/// Delete removes exactly one record and keeps the rest in order; a
/// second delete of the same id is NotFound.
#[test]
fn test_delete_semantics() {
    let store = BookStore::new();
    let a = store.add(draft("A", 10, 0)).unwrap();
    let b = store.add(draft("B", 10, 0)).unwrap();
    let c = store.add(draft("C", 10, 0)).unwrap();
    let d = store.add(draft("D", 10, 0)).unwrap();

    store.delete(&b).unwrap();

    let listed = store.list(&ListFilter::default()).unwrap();
    let ids: Vec<&str> = listed.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec![a.as_str(), c.as_str(), d.as_str()]);

    assert!(matches!(store.delete(&b), Err(CatalogError::NotFound)));
    assert_eq!(store.len(), 3);
}
