//! Book record model and request types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A catalog book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Store-assigned identifier, unique and never reused
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Request body for creating a book.
///
/// Missing fields deserialize to the empty string, so "absent" and "blank"
/// fail the same validation with the same per-field message.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title cannot be blank!"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Author cannot be blank!"))]
    pub author: String,
}

/// Whitespace-only input counts as blank
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
