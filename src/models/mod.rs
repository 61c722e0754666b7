//! Data models for Bookcase

pub mod book;

// Re-export commonly used types
pub use book::{Book, CreateBook};
