//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "1.0.0",
        description = "Book catalog and user REST API. Every book and user endpoint answers \
                       HTTP 200 with a `success` flag; check it instead of the status code."
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::add_book,
        books::list_books,
        // Users
        users::register,
        users::login,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::AddBook,
            crate::models::user::RegisterUser,
            crate::models::user::LoginRequest,
            crate::models::response::MessageResponse,
            crate::models::response::BookListResponse,
            crate::models::response::LoginResponse,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog"),
        (name = "users", description = "User registration and login")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
