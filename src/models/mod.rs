//! Data models for Bookshelf

pub mod book;
pub mod response;
pub mod user;

// Re-export commonly used types
pub use book::{AddBook, Book};
pub use response::{BookListResponse, LoginResponse, MessageResponse};
pub use user::{LoginRequest, RegisterUser, User, UserClaims};
