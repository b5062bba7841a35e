//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::book::{AddBook, Book, DUPLICATE_ISBN_MESSAGE},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book unless its ISBN is already catalogued
    pub async fn add_book(&self, data: &AddBook) -> AppResult<Book> {
        if self
            .repository
            .books
            .find_by_isbn(&data.isbn)
            .await?
            .is_some()
        {
            tracing::debug!(isbn = %data.isbn, "ISBN already catalogued");
            return Err(AppError::Duplicate(DUPLICATE_ISBN_MESSAGE.to_string()));
        }

        let book = Book::new(data.isbn.clone(), data.name.clone());
        self.repository.books.insert(&book).await?;

        tracing::info!(id = %book.id, isbn = %book.isbn, "Book added");
        Ok(book)
    }

    /// List every book in store order. An empty catalog is not an error.
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.find_all().await
    }
}
