//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books in creation order
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get a single book by id
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Validate and create a new book (JSON API path).
    /// A blank field never reaches the store.
    pub async fn add_book(&self, payload: CreateBook) -> AppResult<Book> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(first_error_message(&e)))?;

        let book = self
            .repository
            .books
            .create(&payload.title, &payload.author)
            .await?;

        tracing::info!("Created book id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    /// Create a book from the browser form path. The listing page performs
    /// no server-side validation; the form relies on the browser's
    /// `required` attributes.
    pub async fn add_book_from_form(&self, title: &str, author: &str) -> AppResult<Book> {
        self.repository.books.create(title, author).await
    }

    /// Delete a book, reporting NotFound when the id does not exist
    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    /// Delete a book if present; a missing id is a no-op (listing page path)
    pub async fn remove_book_if_present(&self, id: i64) -> AppResult<()> {
        match self.repository.books.delete(id).await {
            Ok(()) => Ok(()),
            Err(AppError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Pick the message for the first failed field, checked in declaration order
fn first_error_message(errors: &validator::ValidationErrors) -> String {
    for field in ["title", "author"] {
        if let Some(field_errors) = errors.field_errors().get(field) {
            if let Some(message) = field_errors.iter().find_map(|e| e.message.clone()) {
                return message.into_owned();
            }
        }
    }
    "Invalid request".to_string()
}
