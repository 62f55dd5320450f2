//! 集成测试公共设施
//!
//! 每个测试使用独立的 `mem://` 数据库，互不干扰。

#![allow(dead_code)]

use async_graphql::{Request, Response, Variables};
use serde_json::Value;
use staff_server::auth::JwtConfig;
use staff_server::{Config, ServerState, StaffSchema, build_schema};

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub async fn setup_state() -> ServerState {
    let config = Config::with_overrides("mem://", JwtConfig::with_secret(TEST_SECRET));
    ServerState::initialize(&config)
        .await
        .expect("Failed to initialize in-memory server state")
}

pub async fn setup() -> (ServerState, StaffSchema) {
    let state = setup_state().await;
    let schema = build_schema(state.clone());
    (state, schema)
}

/// Execute a document with JSON variables
pub async fn execute(schema: &StaffSchema, query: &str, variables: Value) -> Response {
    schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await
}

/// Response data as JSON; panics when the response carries errors
pub fn data(resp: Response) -> Value {
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
    resp.data.into_json().expect("data is valid JSON")
}

/// `extensions.code` of the first error
pub fn error_code(resp: &Response) -> Option<String> {
    let err = resp.errors.first()?;
    let code = err.extensions.as_ref()?.get("code")?;
    match code {
        async_graphql::Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

pub const SIGNUP: &str = r#"
    mutation Signup($username: String!, $email: String!, $password: String!) {
        signup(username: $username, email: $email, password: $password) {
            token
            user { id username email password }
        }
    }
"#;

pub const LOGIN: &str = r#"
    query Login($username: String!, $password: String!) {
        login(username: $username, password: $password) {
            token
            user { id username email }
        }
    }
"#;

pub const ADD_EMPLOYEE: &str = r#"
    mutation Add($first: String!, $last: String!, $email: String!, $gender: Gender, $salary: Float!) {
        addNewEmployee(first_name: $first, last_name: $last, email: $email, gender: $gender, salary: $salary) {
            id first_name last_name email gender salary
        }
    }
"#;

/// Create an employee through the schema and return its id
pub async fn add_employee(schema: &StaffSchema, first: &str, email: &str, salary: f64) -> String {
    let resp = execute(
        schema,
        ADD_EMPLOYEE,
        serde_json::json!({
            "first": first,
            "last": "Tester",
            "email": email,
            "gender": "Female",
            "salary": salary,
        }),
    )
    .await;
    data(resp)["addNewEmployee"]["id"]
        .as_str()
        .expect("employee id")
        .to_string()
}
