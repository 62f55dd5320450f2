//! Query resolvers

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use crate::core::ServerState;
use crate::db::models::Employee;
use crate::services::AuthPayload;
use crate::utils::AppError;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Authenticate with a username (or email) and password
    async fn login(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> Result<AuthPayload> {
        let state = ctx.data::<ServerState>()?;
        state
            .accounts()
            .login(&username, &password)
            .await
            .map_err(|e| e.extend())
    }

    /// All employees, in creation order
    async fn get_all_employees(&self, ctx: &Context<'_>) -> Result<Vec<Employee>> {
        let state = ctx.data::<ServerState>()?;
        state
            .employees()
            .find_all()
            .await
            .map_err(|e| AppError::from(e).extend())
    }

    /// One employee by id, or null
    async fn search_employee_by_eid(
        &self,
        ctx: &Context<'_>,
        eid: ID,
    ) -> Result<Option<Employee>> {
        let state = ctx.data::<ServerState>()?;
        state
            .employees()
            .find_by_id(&eid)
            .await
            .map_err(|e| AppError::from(e).extend())
    }
}
