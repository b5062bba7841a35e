//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Failure message when the ISBN is already catalogued
pub const DUPLICATE_ISBN_MESSAGE: &str = "Book Already Exist with this ISBN number";

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: Uuid,
    /// ISBN, unique across the collection
    pub isbn: String,
    /// Book title
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Build a new record with a fresh identifier
    pub fn new(isbn: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            isbn: isbn.into(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// Add book request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct AddBook {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter both ISBN and Book Name"))]
    pub isbn: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter both ISBN and Book Name"))]
    pub name: String,
}
