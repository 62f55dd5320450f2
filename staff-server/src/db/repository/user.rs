//! User Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{NewUser, User};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

const TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a user whose username OR email equals `login`
    pub async fn find_by_login(&self, login: &str) -> RepoResult<Option<User>> {
        let login_owned = login.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE username = $login OR email = $login")
            .bind(("login", login_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Find a user whose username or email equals either candidate
    ///
    /// Both values are checked against both columns, so a username equal to
    /// another user's email (or the reverse) counts as taken and `login` can
    /// never match two different users.
    pub async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM user \
                 WHERE username IN [$username, $email] OR email IN [$username, $email]",
            )
            .bind(("username", username.to_string()))
            .bind(("email", email.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Insert a new user
    ///
    /// Uniqueness is checked by the caller; the `UNIQUE` indexes reject a
    /// racing insert with [`RepoError::Duplicate`].
    pub async fn create(&self, data: NewUser) -> RepoResult<User> {
        let created: Option<User> = self.base.db().create(TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}
