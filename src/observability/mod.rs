//! Observability subsystem for bookshelf
//!
//! Structured JSON logging with deterministic output. Read-only: no
//! side effects on request handling, no background threads.

pub mod logger;

pub use logger::Severity;
