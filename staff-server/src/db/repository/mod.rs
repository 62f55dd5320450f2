//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

pub mod employee;
pub mod user;

// Re-exports
pub use employee::EmployeeRepository;
pub use user::UserRepository;

use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // UNIQUE index violation, e.g. when two signups race past the pre-check
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 对外暴露的 ID 是 RecordId 的字符串形式 (如 "employee:k3x9...")。
// 输入端同时接受完整形式和纯 key 形式，由 parse_record_id 统一解析。

/// Parse an incoming id for `table`, accepting `table:key` or a bare `key`
pub fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    let id = id.trim();
    if id.is_empty() {
        return Err(RepoError::Validation("ID must not be empty".to_string()));
    }

    let record: RecordId = if id.contains(':') {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?
    } else {
        RecordId::from_table_key(table, id)
    };

    if record.table() != table {
        return Err(RepoError::Validation(format!(
            "ID {} does not belong to table {}",
            id, table
        )));
    }
    Ok(record)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record_id() {
        let id = parse_record_id("employee", "employee:abc123").expect("parse");
        assert_eq!(id.table(), "employee");
        assert_eq!(id.to_string(), "employee:abc123");
    }

    #[test]
    fn test_parse_bare_key() {
        let id = parse_record_id("employee", "abc123").expect("parse");
        assert_eq!(id, RecordId::from_table_key("employee", "abc123"));
    }

    #[test]
    fn test_parse_rejects_foreign_table_and_blank() {
        assert!(matches!(
            parse_record_id("employee", "user:abc123"),
            Err(RepoError::Validation(_))
        ));
        assert!(matches!(
            parse_record_id("employee", "  "),
            Err(RepoError::Validation(_))
        ));
    }
}
