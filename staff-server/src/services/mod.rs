//! 服务层
//!
//! - [`AccountService`] - 注册 / 登录

pub mod account;

pub use account::{AccountService, AuthPayload};
