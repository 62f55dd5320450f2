//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "employee";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Parse an employee id (`employee:key` or bare key)
    pub fn parse_id(id: &str) -> RepoResult<RecordId> {
        parse_record_id(TABLE, id)
    }

    /// Find all employees in creation order
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY created_at ASC, id ASC")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = Self::parse_id(id)?;
        let emp: Option<Employee> = self.base.db().select(thing).await?;
        Ok(emp)
    }

    /// Find employee by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email")
            .bind(("email", email_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Create a new employee
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        // Check duplicate email
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Employee with email '{}' already exists",
                data.email
            )));
        }

        let created: Option<Employee> = self.base.db().create(TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Partially update an employee
    ///
    /// Returns `None` when no employee has this id.
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Option<Employee>> {
        let thing = Self::parse_id(id)?;
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        // Check duplicate email if changing
        if let Some(ref new_email) = data.email
            && new_email != &existing.email
            && self.find_by_email(new_email).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Employee with email '{}' already exists",
                new_email
            )));
        }

        if data.is_empty() {
            return Ok(Some(existing));
        }

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        let updated: Option<Employee> = result.take(0)?;
        Ok(updated)
    }

    /// Hard delete an employee
    ///
    /// Returns whether a record was actually removed.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = Self::parse_id(id)?;
        let mut result = self
            .base
            .db()
            .query("DELETE $thing RETURN BEFORE")
            .bind(("thing", thing))
            .await?;
        let removed: Option<Employee> = result.take(0)?;
        Ok(removed.is_some())
    }
}
