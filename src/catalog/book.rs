//! # Book Records
//!
//! The catalog entity, its wire projections, and the input draft that
//! payloads deserialize into before validation.

use chrono::{SecondsFormat, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Length of generated book identifiers
pub const BOOK_ID_LEN: usize = 16;

/// URL-safe alphabet for generated identifiers (64 symbols)
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// A catalog entry.
///
/// `finished` is derived state: it must equal `read_page == page_count`
/// after every create or update. `id` and `inserted_at` never change
/// once the record exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub page_count: i64,
    pub read_page: i64,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: String,
    pub updated_at: String,
}

/// Listing projection: id, name, publisher only
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Incoming payload for add and update.
///
/// Every field is optional at the wire level; `name` is required by
/// validation, and absent page counts default to zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub name: Option<String>,
    pub year: Option<i64>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub page_count: i64,
    #[serde(default)]
    pub read_page: i64,
    #[serde(default)]
    pub reading: bool,
}

impl BookDraft {
    /// Whether the draft describes a fully read book
    pub fn is_finished(&self) -> bool {
        self.page_count == self.read_page
    }
}

/// Generate a random 16-character book identifier.
///
/// Random bytes from the OS generator, mapped onto a 64-symbol URL-safe
/// alphabet.
pub fn generate_book_id() -> String {
    let mut bytes = [0u8; BOOK_ID_LEN];
    OsRng.fill_bytes(&mut bytes);

    bytes
        .iter()
        .map(|b| ID_ALPHABET[(b & 0x3f) as usize] as char)
        .collect()
}

/// Current UTC time as an ISO 8601 string with millisecond precision
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
