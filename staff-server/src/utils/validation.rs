//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! GraphQL typing already rejects missing or mistyped arguments; these checks
//! cover what the type system cannot express (blank strings, absurd lengths).

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Person names: first_name, last_name
pub const MAX_NAME_LEN: usize = 200;

/// Login names
pub const MAX_USERNAME_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, obeys the same rules as a required one.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_required_text(v, field, max_len)?;
    }
    Ok(())
}

/// Salary must be a finite number
pub fn validate_salary(value: f64) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation("salary must be a finite number"));
    }
    Ok(())
}
