//! In-memory record store, used for local runs (`database.backend = "memory"`)
//! and tests. Contents are lost when the process exits.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookStore, UserStore};
use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, DUPLICATE_ISBN_MESSAGE},
        user::{User, DUPLICATE_EMAIL_MESSAGE},
    },
};

#[derive(Default)]
pub struct MemoryStore {
    books: RwLock<Vec<Book>>,
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.isbn == isbn).cloned())
    }

    async fn insert(&self, book: &Book) -> AppResult<()> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.isbn == book.isbn) {
            return Err(AppError::Duplicate(DUPLICATE_ISBN_MESSAGE.to_string()));
        }
        books.push(book.clone());
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Duplicate(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }
        users.push(user.clone());
        Ok(())
    }
}
