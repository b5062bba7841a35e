//! User registration and login endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{LoginRequest, LoginResponse, MessageResponse, RegisterUser},
};

use super::ValidatedJson;

pub const USER_REGISTERED_MESSAGE: &str = "User registered successfully";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/user/register",
    tag = "users",
    request_body = RegisterUser,
    responses(
        (status = 200, description = "User registered, or `success: false` with the reason", body = MessageResponse)
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<RegisterUser>,
) -> AppResult<Json<MessageResponse>> {
    state.services.users.register(&data).await?;
    Ok(Json(MessageResponse::ok(USER_REGISTERED_MESSAGE)))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/user/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued; failures come back as `{success: false, message}`", body = LoginResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    ValidatedJson(credentials): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let token = state.services.users.login(&credentials).await?;
    Ok(Json(LoginResponse {
        success: true,
        message: LOGIN_SUCCESS_MESSAGE.to_string(),
        token,
    }))
}
