//! GraphQL object types
//!
//! Database models are exposed directly; ids are rendered in `table:key` form.

use async_graphql::{ID, Object, SimpleObject};

use crate::db::models::{Employee, Gender, User};

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn username(&self) -> &str {
        &self.username
    }

    async fn email(&self) -> &str {
        &self.email
    }

    /// Argon2 hash of the password, never the plaintext
    async fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[Object]
impl Employee {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    #[graphql(name = "first_name")]
    async fn first_name(&self) -> &str {
        &self.first_name
    }

    #[graphql(name = "last_name")]
    async fn last_name(&self) -> &str {
        &self.last_name
    }

    async fn email(&self) -> &str {
        &self.email
    }

    async fn gender(&self) -> Option<Gender> {
        self.gender
    }

    async fn salary(&self) -> f64 {
        self.salary
    }
}

/// Result of `deleteEmployeeByEid`
#[derive(Debug, Clone, SimpleObject)]
pub struct DeletePayload {
    pub success: bool,
    pub message: String,
}

impl DeletePayload {
    pub fn deleted() -> Self {
        Self {
            success: true,
            message: "Employee deleted successfully".to_string(),
        }
    }
}
