//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResult`] - 应用级 Result
//! - 输入校验、日志等工具

pub mod error;
pub mod logger;
pub mod validation;

pub use error::AppError;

/// Application-level Result type
///
/// Used in resolvers and application logic
pub type AppResult<T> = Result<T, AppError>;
