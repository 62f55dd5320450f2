//! User Model

use crate::auth::HashedPassword;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// User ID type
pub type UserId = RecordId;

/// User model matching the `user` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: HashedPassword,
}

/// Insert payload for a new user
///
/// Only accepts an already hashed password.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: HashedPassword,
}

impl NewUser {
    pub fn new(username: String, email: String, password: HashedPassword) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}
