//! Mutation resolvers

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate, Gender};
use crate::graphql::types::DeletePayload;
use crate::services::AuthPayload;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, validate_optional_text, validate_required_text, validate_salary,
};
use crate::utils::{AppError, AppResult};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Register a user and return a token
    async fn signup(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> Result<AuthPayload> {
        let state = ctx.data::<ServerState>()?;
        state
            .accounts()
            .signup(username, email, password)
            .await
            .map_err(|e| e.extend())
    }

    /// Create an employee
    async fn add_new_employee(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "first_name")] first_name: String,
        #[graphql(name = "last_name")] last_name: String,
        email: String,
        gender: Option<Gender>,
        salary: f64,
    ) -> Result<Employee> {
        let state = ctx.data::<ServerState>()?;
        let payload = EmployeeCreate {
            first_name,
            last_name,
            email,
            gender,
            salary,
        };
        validate_create(&payload).map_err(|e| e.extend())?;

        let employee = state
            .employees()
            .create(payload)
            .await
            .map_err(|e| AppError::from(e).extend())?;

        tracing::info!(employee_id = %employee.id, "Employee created");
        Ok(employee)
    }

    /// Partially update an employee; null when the id is unknown
    async fn update_employee_by_eid(
        &self,
        ctx: &Context<'_>,
        eid: ID,
        #[graphql(name = "first_name")] first_name: Option<String>,
        #[graphql(name = "last_name")] last_name: Option<String>,
        email: Option<String>,
        gender: Option<Gender>,
        salary: Option<f64>,
    ) -> Result<Option<Employee>> {
        let state = ctx.data::<ServerState>()?;
        let payload = EmployeeUpdate {
            first_name,
            last_name,
            email,
            gender,
            salary,
        };
        validate_update(&payload).map_err(|e| e.extend())?;

        let employee = state
            .employees()
            .update(&eid, payload)
            .await
            .map_err(|e| AppError::from(e).extend())?;

        if employee.is_some() {
            tracing::info!(employee_id = %eid.as_str(), "Employee updated");
        }
        Ok(employee)
    }

    /// Delete an employee; succeeds whether or not the record existed
    async fn delete_employee_by_eid(&self, ctx: &Context<'_>, eid: ID) -> Result<DeletePayload> {
        let state = ctx.data::<ServerState>()?;
        let removed = state
            .employees()
            .delete(&eid)
            .await
            .map_err(|e| AppError::from(e).extend())?;

        if removed {
            tracing::info!(employee_id = %eid.as_str(), "Employee deleted");
        }
        Ok(DeletePayload::deleted())
    }
}

fn validate_create(payload: &EmployeeCreate) -> AppResult<()> {
    validate_required_text(&payload.first_name, "first_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.last_name, "last_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_salary(payload.salary)
}

fn validate_update(payload: &EmployeeUpdate) -> AppResult<()> {
    validate_optional_text(&payload.first_name, "first_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.last_name, "last_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    if let Some(salary) = payload.salary {
        validate_salary(salary)?;
    }
    Ok(())
}
