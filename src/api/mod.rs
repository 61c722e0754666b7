//! API handlers for the Bookcase JSON endpoints

pub mod books;
pub mod health;
pub mod openapi;
