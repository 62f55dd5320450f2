//! Database Models

pub mod employee;
pub mod user;

// Re-exports
pub use employee::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate, Gender};
pub use user::{NewUser, User, UserId};
