//! Account Service
//!
//! Signup and login flows: credential hashing, user persistence, token issuance.

use std::sync::Arc;

use async_graphql::SimpleObject;

use crate::auth::{HashedPassword, JwtService};
use crate::db::models::{NewUser, User};
use crate::db::repository::UserRepository;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_PASSWORD_LEN, MAX_USERNAME_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Bearer token plus the authenticated user
#[derive(Debug, Clone, SimpleObject)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[derive(Clone)]
pub struct AccountService {
    users: UserRepository,
    jwt_service: Arc<JwtService>,
}

impl AccountService {
    pub fn new(users: UserRepository, jwt_service: Arc<JwtService>) -> Self {
        Self { users, jwt_service }
    }

    /// Register a new user and issue a token
    ///
    /// Fails with `Conflict` when the username or the email is already taken.
    pub async fn signup(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<AuthPayload> {
        validate_required_text(&username, "username", MAX_USERNAME_LEN)?;
        validate_required_text(&email, "email", MAX_EMAIL_LEN)?;
        validate_required_text(&password, "password", MAX_PASSWORD_LEN)?;

        if self
            .users
            .find_by_username_or_email(&username, &email)
            .await?
            .is_some()
        {
            tracing::info!(username = %username, "Signup rejected - user already exists");
            return Err(AppError::conflict("User already exists"));
        }

        let hashed = hash_password(password).await?;
        let user = self
            .users
            .create(NewUser::new(username, email, hashed))
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::Conflict(_) => AppError::conflict("User already exists"),
                other => other,
            })?;

        let token = self.issue_token(&user)?;
        tracing::info!(user_id = %user.id, username = %user.username, "User signed up");

        Ok(AuthPayload { token, user })
    }

    /// Authenticate by username or email and issue a token
    ///
    /// Unknown user and wrong password produce the same `Unauthorized` error.
    pub async fn login(&self, login: &str, password: &str) -> AppResult<AuthPayload> {
        let user = self.users.find_by_login(login).await?;

        // Unknown users are verified against the placeholder so both failures cost one argon2 run
        let stored = user
            .as_ref()
            .map(|u| u.password.clone())
            .unwrap_or_else(HashedPassword::placeholder);
        let password_valid = verify_password(stored, password.to_string()).await?;

        let user = match user {
            Some(user) if password_valid => user,
            Some(_) => {
                tracing::warn!(username = %login, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }
            None => {
                tracing::warn!(username = %login, "Login failed - user not found");
                return Err(AppError::invalid_credentials());
            }
        };

        let token = self.issue_token(&user)?;
        tracing::info!(user_id = %user.id, username = %user.username, "User logged in successfully");

        Ok(AuthPayload { token, user })
    }

    fn issue_token(&self, user: &User) -> AppResult<String> {
        self.jwt_service
            .issue_token(&user.id.to_string(), &user.username)
            .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))
    }
}

/// Argon2 is CPU bound; keep it off the async workers
async fn hash_password(password: String) -> AppResult<HashedPassword> {
    tokio::task::spawn_blocking(move || HashedPassword::hash(&password))
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

async fn verify_password(hash: HashedPassword, password: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || hash.verify(&password))
        .await
        .map_err(|e| AppError::internal(format!("Verification task failed: {}", e)))?
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))
}
