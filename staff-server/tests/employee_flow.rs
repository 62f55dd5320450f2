//! 员工 CRUD 流程
//! Run: cargo test -p staff-server --test employee_flow

mod common;

use common::{ADD_EMPLOYEE, add_employee, data, error_code, execute, setup};
use serde_json::json;

const SEARCH: &str = r#"
    query Search($eid: ID!) {
        searchEmployeeByEid(eid: $eid) { id first_name last_name email gender salary }
    }
"#;

const ALL: &str = "{ getAllEmployees { id first_name email } }";

const UPDATE: &str = r#"
    mutation Update($eid: ID!, $first: String, $email: String, $salary: Float) {
        updateEmployeeByEid(eid: $eid, first_name: $first, email: $email, salary: $salary) {
            id first_name last_name email gender salary
        }
    }
"#;

const DELETE: &str = r#"
    mutation Delete($eid: ID!) {
        deleteEmployeeByEid(eid: $eid) { success message }
    }
"#;

#[tokio::test]
async fn add_then_search_returns_same_record() {
    let (_state, schema) = setup().await;

    let resp = execute(
        &schema,
        ADD_EMPLOYEE,
        json!({
            "first": "Ada",
            "last": "Lovelace",
            "email": "ada@example.com",
            "gender": "Female",
            "salary": 85000.5,
        }),
    )
    .await;
    let created = data(resp)["addNewEmployee"].clone();
    let id = created["id"].as_str().expect("id").to_string();
    assert!(id.starts_with("employee:"));
    assert_eq!(created["gender"], "Female");

    let found = data(execute(&schema, SEARCH, json!({ "eid": id })).await);
    assert_eq!(found["searchEmployeeByEid"], created);

    // bare key resolves to the same record
    let key = id.trim_start_matches("employee:");
    let found = data(execute(&schema, SEARCH, json!({ "eid": key })).await);
    assert_eq!(found["searchEmployeeByEid"]["id"], id.as_str());
}

#[tokio::test]
async fn gender_is_optional() {
    let (_state, schema) = setup().await;

    let resp = execute(
        &schema,
        ADD_EMPLOYEE,
        json!({ "first": "Sam", "last": "Doe", "email": "sam@example.com", "salary": 1000 }),
    )
    .await;
    let created = data(resp);
    assert!(created["addNewEmployee"]["gender"].is_null());
}

#[tokio::test]
async fn get_all_lists_in_creation_order() {
    let (_state, schema) = setup().await;

    let empty = data(execute(&schema, ALL, json!({})).await);
    assert_eq!(empty["getAllEmployees"], json!([]));

    let a = add_employee(&schema, "First", "first@example.com", 1.0).await;
    let b = add_employee(&schema, "Second", "second@example.com", 2.0).await;
    let c = add_employee(&schema, "Third", "third@example.com", 3.0).await;

    let all = data(execute(&schema, ALL, json!({})).await);
    let ids: Vec<&str> = all["getAllEmployees"]
        .as_array()
        .expect("list")
        .iter()
        .filter_map(|e| e["id"].as_str())
        .collect();
    assert_eq!(ids, vec![a.as_str(), b.as_str(), c.as_str()]);
}

#[tokio::test]
async fn search_unknown_id_returns_null() {
    let (_state, schema) = setup().await;

    let resp = execute(&schema, SEARCH, json!({ "eid": "employee:missing" })).await;
    assert!(data(resp)["searchEmployeeByEid"].is_null());
}

#[tokio::test]
async fn search_with_foreign_table_id_is_validation_error() {
    let (_state, schema) = setup().await;

    let resp = execute(&schema, SEARCH, json!({ "eid": "user:abc" })).await;
    assert_eq!(error_code(&resp).as_deref(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let (_state, schema) = setup().await;
    let id = add_employee(&schema, "Grace", "grace@example.com", 5000.0).await;

    let resp = execute(&schema, UPDATE, json!({ "eid": id, "salary": 7500.0 })).await;
    let updated = data(resp)["updateEmployeeByEid"].clone();
    assert_eq!(updated["salary"], 7500.0);
    assert_eq!(updated["first_name"], "Grace");
    assert_eq!(updated["last_name"], "Tester");
    assert_eq!(updated["email"], "grace@example.com");
    assert_eq!(updated["gender"], "Female");

    let found = data(execute(&schema, SEARCH, json!({ "eid": id })).await);
    assert_eq!(found["searchEmployeeByEid"], updated);
}

#[tokio::test]
async fn update_without_fields_returns_current_record() {
    let (_state, schema) = setup().await;
    let id = add_employee(&schema, "Linus", "linus@example.com", 10.0).await;

    let resp = execute(&schema, UPDATE, json!({ "eid": id })).await;
    let current = data(resp);
    assert_eq!(current["updateEmployeeByEid"]["first_name"], "Linus");
    assert_eq!(current["updateEmployeeByEid"]["salary"], 10.0);
}

#[tokio::test]
async fn update_unknown_id_returns_null() {
    let (_state, schema) = setup().await;

    let resp = execute(&schema, UPDATE, json!({ "eid": "employee:ghost", "salary": 1.0 })).await;
    assert!(data(resp)["updateEmployeeByEid"].is_null());
}

#[tokio::test]
async fn update_to_taken_email_is_conflict() {
    let (_state, schema) = setup().await;
    add_employee(&schema, "One", "one@example.com", 1.0).await;
    let two = add_employee(&schema, "Two", "two@example.com", 2.0).await;

    let resp = execute(&schema, UPDATE, json!({ "eid": two, "email": "one@example.com" })).await;
    assert_eq!(error_code(&resp).as_deref(), Some("CONFLICT"));

    // keeping its own email is fine
    let resp = execute(&schema, UPDATE, json!({ "eid": two, "email": "two@example.com" })).await;
    assert_eq!(data(resp)["updateEmployeeByEid"]["email"], "two@example.com");
}

#[tokio::test]
async fn update_with_blank_field_is_validation_error() {
    let (_state, schema) = setup().await;
    let id = add_employee(&schema, "Blank", "blank@example.com", 1.0).await;

    let resp = execute(&schema, UPDATE, json!({ "eid": id, "first": "" })).await;
    assert_eq!(error_code(&resp).as_deref(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn delete_succeeds_even_when_record_is_gone() {
    let (_state, schema) = setup().await;
    let id = add_employee(&schema, "Temp", "temp@example.com", 1.0).await;

    for _ in 0..2 {
        let resp = execute(&schema, DELETE, json!({ "eid": id })).await;
        let body = data(resp);
        assert_eq!(body["deleteEmployeeByEid"]["success"], true);
        assert_eq!(
            body["deleteEmployeeByEid"]["message"],
            "Employee deleted successfully"
        );
    }

    let found = data(execute(&schema, SEARCH, json!({ "eid": id })).await);
    assert!(found["searchEmployeeByEid"].is_null());
}

#[tokio::test]
async fn duplicate_employee_email_is_conflict() {
    let (_state, schema) = setup().await;
    add_employee(&schema, "Orig", "dup@example.com", 1.0).await;

    let resp = execute(
        &schema,
        ADD_EMPLOYEE,
        json!({ "first": "Copy", "last": "Cat", "email": "dup@example.com", "salary": 2.0 }),
    )
    .await;
    assert_eq!(error_code(&resp).as_deref(), Some("CONFLICT"));

    let all = data(execute(&schema, ALL, json!({})).await);
    assert_eq!(all["getAllEmployees"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn blank_required_field_is_validation_error() {
    let (_state, schema) = setup().await;

    let resp = execute(
        &schema,
        ADD_EMPLOYEE,
        json!({ "first": "   ", "last": "Doe", "email": "doe@example.com", "salary": 1.0 }),
    )
    .await;
    assert_eq!(error_code(&resp).as_deref(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn malformed_arguments_are_rejected_before_resolvers() {
    let (_state, schema) = setup().await;

    // missing salary
    let resp = execute(
        &schema,
        r#"mutation { addNewEmployee(first_name: "A", last_name: "B", email: "a@b.c") { id } }"#,
        json!({}),
    )
    .await;
    assert!(!resp.errors.is_empty());

    // unknown enum value
    let resp = execute(
        &schema,
        r#"mutation { addNewEmployee(first_name: "A", last_name: "B", email: "a@b.c", gender: Robot, salary: 1) { id } }"#,
        json!({}),
    )
    .await;
    assert!(!resp.errors.is_empty());

    // nothing was stored
    let all = data(execute(&schema, ALL, json!({})).await);
    assert_eq!(all["getAllEmployees"], json!([]));
}
