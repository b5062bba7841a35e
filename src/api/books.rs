//! Book catalog endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{AddBook, BookListResponse, MessageResponse},
};

use super::ValidatedJson;

pub const BOOK_ADDED_MESSAGE: &str = "Book added successfully";

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/api/book/addbook",
    tag = "books",
    request_body = AddBook,
    responses(
        (status = 200, description = "Book added, or `success: false` with the reason", body = MessageResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<AddBook>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.add_book(&data).await?;
    Ok(Json(MessageResponse::ok(BOOK_ADDED_MESSAGE)))
}

/// List every book in the catalog
#[utoipa::path(
    get,
    path = "/api/book/listbook",
    tag = "books",
    responses(
        (status = 200, description = "All books; a store failure yields `{success: false, message}`", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BookListResponse>> {
    let books = state.services.books.list_books().await?;
    Ok(Json(BookListResponse {
        success: true,
        data: books,
    }))
}
