//! Convert browser bookmark exports (Netscape bookmark files) into JSON
//! bookmark trees, filter them by folder and collect their URLs.

pub mod config;
pub mod error;
pub mod import_export;
pub mod models;
pub mod operations;
pub mod parser;
pub mod utils;

// Re-export error types for convenience
pub use error::BmtreeError;
pub use models::{Bookmark, Folder, Node};
