//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{duplicate_on_unique_violation, BookStore};
use crate::{
    error::AppResult,
    models::book::{Book, DUPLICATE_ISBN_MESSAGE},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, isbn, name, created_at FROM books WHERE isbn = $1",
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn insert(&self, book: &Book) -> AppResult<()> {
        // books_isbn_unique closes the gap between the existence check and this insert
        sqlx::query(
            r#"
            INSERT INTO books (id, isbn, name, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(book.id)
        .bind(&book.isbn)
        .bind(&book.name)
        .bind(book.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| duplicate_on_unique_violation(e, DUPLICATE_ISBN_MESSAGE))?;

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, isbn, name, created_at FROM books ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
