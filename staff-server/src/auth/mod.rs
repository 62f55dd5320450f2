//! 凭据服务
//!
//! - [`HashedPassword`] - Argon2 密码哈希与校验
//! - [`JwtService`] - JWT 令牌签发

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use password::HashedPassword;
