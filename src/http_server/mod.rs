//! # Bookshelf HTTP Server Module
//!
//! HTTP surface of the book catalog service.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/books` - Add and list books
//! - `/books/{id}` - Fetch, update, delete a book

pub mod book_routes;
pub mod config;
pub mod response;
pub mod server;

pub use book_routes::CatalogState;
pub use config::HttpServerConfig;
pub use response::{Envelope, ResponseStatus};
pub use server::HttpServer;
