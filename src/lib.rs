//! bookshelf - a self-hostable, in-memory book catalog service

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
