//! Bookcase Book Catalog Server
//!
//! A Rust implementation of the Bookcase catalog service, providing a JSON
//! API and a server-rendered listing page over a single store of book
//! records.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
