//! 统一错误处理
//!
//! 提供应用级错误类型：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResult`] - 应用级 Result 别名
//!
//! # 错误码规范
//!
//! GraphQL 错误通过 `extensions.code` 携带错误码：
//!
//! | 错误码 | 分类 | 说明 |
//! |------|------|------|
//! | UNAUTHORIZED | 认证错误 | 用户名或密码错误 |
//! | CONFLICT | 业务错误 | 唯一字段冲突 |
//! | VALIDATION_ERROR | 业务错误 | 输入校验失败 |
//! | DATABASE_ERROR | 系统错误 | 数据库错误 (不暴露细节) |
//! | INTERNAL_ERROR | 系统错误 | 内部错误 (不暴露细节) |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::conflict("User already exists"))
//!
//! // 在 resolver 中转换为 GraphQL 错误
//! repo.create(data).await.map_err(AppError::from).map_err(|e| e.extend())?;
//! ```

use async_graphql::ErrorExtensions;
use tracing::error;

use crate::db::repository::RepoError;

/// Unified login failure message, shared by "no such user" and "wrong password"
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// 应用错误枚举
///
/// | 分类 | 说明 |
/// |------|------|
/// | 认证错误 | 凭据无效 |
/// | 业务逻辑错误 | 验证失败、唯一冲突 |
/// | 系统错误 | 数据库错误、内部错误 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 ==========
    #[error("{0}")]
    /// 凭据无效
    Unauthorized(String),

    // ========== 业务逻辑错误 ==========
    #[error("{0}")]
    /// 资源冲突
    Conflict(String),

    #[error("Validation failed: {0}")]
    /// 验证失败
    Validation(String),

    // ========== 系统错误 ==========
    #[error("Database error: {0}")]
    /// 数据库错误
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误
    Internal(String),
}

impl AppError {
    /// Error code carried in `extensions.code`
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message shown to the caller; system errors are replaced by an opaque text
    pub fn public_message(&self) -> String {
        match self {
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    /// Create an invalid credentials error with unified message
    /// Used to prevent username enumeration during login
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized(INVALID_CREDENTIALS.to_string())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.public_message()).extend_with(|_, ext| ext.set("code", code))
    }
}
