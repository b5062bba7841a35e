//! Repository layer: the record store behind the services.
//!
//! Each collection is reached through a store trait so services can run
//! against PostgreSQL, the in-memory store, or a mock in tests.

pub mod books;
pub mod memory;
pub mod users;

use std::{future::Future, sync::Arc, time::Duration};

use async_trait::async_trait;
use sqlx::{PgPool, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Book, User},
};

/// Access to the `books` collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Find the book catalogued under `isbn`
    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// Persist a new book. A taken ISBN yields `AppError::Duplicate`.
    async fn insert(&self, book: &Book) -> AppResult<()>;

    /// Every book, in insertion order
    async fn find_all(&self) -> AppResult<Vec<Book>>;
}

/// Access to the `users` collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by normalized email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Persist a new user. A taken email yields `AppError::Duplicate`.
    async fn insert(&self, user: &User) -> AppResult<()>;
}

/// Main repository struct holding the store handles
#[derive(Clone)]
pub struct Repository {
    pub pool: Option<Pool<Postgres>>,
    pub books: Arc<dyn BookStore>,
    pub users: Arc<dyn UserStore>,
}

impl Repository {
    /// Create a PostgreSQL-backed repository with the given pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: Arc::new(books::BooksRepository::new(pool.clone())),
            users: Arc::new(users::UsersRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Create a repository over a fresh in-memory store
    pub fn in_memory() -> Self {
        let store = Arc::new(memory::MemoryStore::default());
        Self {
            pool: None,
            books: store.clone(),
            users: store,
        }
    }

    /// Create a repository over arbitrary store implementations
    pub fn from_stores(books: Arc<dyn BookStore>, users: Arc<dyn UserStore>) -> Self {
        Self {
            pool: None,
            books,
            users,
        }
    }

    /// Check that the backing store answers
    pub async fn ping(&self) -> AppResult<()> {
        if let Some(pool) = &self.pool {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        Ok(())
    }
}

/// Map a unique index violation to a duplicate error carrying `message`
pub(crate) fn duplicate_on_unique_violation(err: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return AppError::Duplicate(message.to_string());
        }
    }
    AppError::Database(err)
}

/// Apply the embedded schema migrations
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::Internal(format!("Database migrations failed: {}", e)))
}

/// Run `attempt` until it succeeds, waiting `interval` after each failure
pub async fn retry_until_ok<T, F, Fut>(task: &str, interval: Duration, mut attempt: F) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut failures: u32 = 0;
    loop {
        match attempt().await {
            Ok(value) => {
                if failures > 0 {
                    tracing::info!(task, failures, "Succeeded after retrying");
                }
                return value;
            }
            Err(e) => {
                failures += 1;
                tracing::warn!(task, failures, "Attempt failed, retrying: {}", e);
                tokio::time::sleep(interval).await;
            }
        }
    }
}
