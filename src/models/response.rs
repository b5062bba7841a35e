//! Response envelopes. Every endpoint answers with a `success` flag plus
//! either a `message` or a `data` payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::Book;

/// `{success, message}` envelope, also used for every failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// `{success, data}` envelope for the book listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookListResponse {
    pub success: bool,
    pub data: Vec<Book>,
}

/// Successful login envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    /// Bearer token (HS256 JWT)
    pub token: String,
}
