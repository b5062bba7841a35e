//! User registration and login service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{
        normalize_email, LoginRequest, RegisterUser, User, UserClaims, DUPLICATE_EMAIL_MESSAGE,
        INVALID_CREDENTIALS_MESSAGE, UNKNOWN_USER_MESSAGE,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new user unless the email is already taken
    pub async fn register(&self, data: &RegisterUser) -> AppResult<User> {
        let email = normalize_email(&data.email);

        if self.repository.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::Duplicate(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }

        let password = self.hash_password(&data.password)?;
        let user = User::new(data.name.trim(), email, password);
        self.repository.users.insert(&user).await?;

        tracing::info!(id = %user.id, "User registered");
        Ok(user)
    }

    /// Check credentials and return a signed token
    pub async fn login(&self, data: &LoginRequest) -> AppResult<String> {
        let email = normalize_email(&data.email);

        let user = self
            .repository
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(UNKNOWN_USER_MESSAGE.to_string()))?;

        if !self.verify_password(&user, &data.password)? {
            tracing::debug!(id = %user.id, "Login rejected: wrong password");
            return Err(AppError::Authentication(INVALID_CREDENTIALS_MESSAGE.to_string()));
        }

        self.create_token_for_user(&user)
    }

    /// Create JWT token for a user
    fn create_token_for_user(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = i64::try_from(self.config.jwt_expiration_hours)
            .ok()
            .and_then(|hours| hours.checked_mul(3600))
            .and_then(|lifetime| now.checked_add(lifetime))
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Token lifetime of {} hours is out of range",
                    self.config.jwt_expiration_hours
                ))
            })?;

        let claims = UserClaims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Verify user password against the stored hash
    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}
