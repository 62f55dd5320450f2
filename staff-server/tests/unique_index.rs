//! UNIQUE 索引兜底：绕过仓储的预检查直接写库，冲突应映射为 CONFLICT

mod common;

use staff_server::AppError;
use staff_server::db::models::{EmployeeCreate, Gender};
use staff_server::db::repository::{EmployeeRepository, RepoError};

fn employee(email: &str) -> EmployeeCreate {
    EmployeeCreate {
        first_name: "Index".to_string(),
        last_name: "Guard".to_string(),
        email: email.to_string(),
        gender: Some(Gender::Other),
        salary: 42.0,
    }
}

#[tokio::test]
async fn raw_duplicate_employee_email_maps_to_conflict() {
    let state = common::setup_state().await;
    EmployeeRepository::new(state.get_db())
        .create(employee("race@example.com"))
        .await
        .expect("first insert");

    let err = state
        .get_db()
        .query("CREATE employee CONTENT $data")
        .bind(("data", employee("race@example.com")))
        .await
        .and_then(|response| response.check())
        .map(|_| ())
        .expect_err("unique index rejects the second insert");

    let repo_err = RepoError::from(err);
    assert!(matches!(repo_err, RepoError::Duplicate(_)), "got {repo_err:?}");
    assert_eq!(AppError::from(repo_err).code(), "CONFLICT");
}

#[tokio::test]
async fn raw_duplicate_username_maps_to_conflict() {
    let state = common::setup_state().await;
    let accounts = state.accounts();
    accounts
        .signup(
            "hank".to_string(),
            "hank@example.com".to_string(),
            "hank-pw".to_string(),
        )
        .await
        .expect("signup");

    let hash = staff_server::HashedPassword::hash("other").expect("hash");
    let err = state
        .get_db()
        .query("CREATE user CONTENT { username: 'hank', email: 'other@example.com', password: $password }")
        .bind(("password", hash.as_str().to_string()))
        .await
        .and_then(|response| response.check())
        .map(|_| ())
        .expect_err("unique index rejects the duplicate username");

    assert!(matches!(RepoError::from(err), RepoError::Duplicate(_)));
}

#[tokio::test]
async fn other_store_errors_stay_database_errors() {
    let state = common::setup_state().await;

    // salary is a float field in the schema
    let err = state
        .get_db()
        .query("CREATE employee CONTENT { first_name: 'a', last_name: 'b', email: 'c@d.e', salary: 'lots' }")
        .await
        .and_then(|response| response.check())
        .map(|_| ())
        .expect_err("schema rejects a string salary");

    let repo_err = RepoError::from(err);
    assert!(matches!(repo_err, RepoError::Database(_)), "got {repo_err:?}");
    assert_eq!(AppError::from(repo_err).code(), "DATABASE_ERROR");
}
