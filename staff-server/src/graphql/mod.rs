//! GraphQL API
//!
//! - [`QueryRoot`]: `login`, `getAllEmployees`, `searchEmployeeByEid`
//! - [`MutationRoot`]: `signup`, `addNewEmployee`, `updateEmployeeByEid`, `deleteEmployeeByEid`
//!
//! Argument shape (required fields, types, enum values) is validated by the
//! schema before any resolver runs.

mod mutation;
mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::DeletePayload;

use async_graphql::{EmptySubscription, Schema};

use crate::core::ServerState;

/// Staff schema (no subscriptions)
pub type StaffSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the server state as context data
pub fn build_schema(state: ServerState) -> StaffSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
