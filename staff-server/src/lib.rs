//! Staff Server - 用户认证与员工档案 GraphQL 服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SurrealDB 文档存储 (`user` / `employee` 两张表)
//! - **认证** (`auth`): Argon2 密码哈希 + JWT 令牌签发
//! - **服务** (`services`): 注册 / 登录流程
//! - **GraphQL** (`graphql`): schema 与 resolver
//! - **HTTP API** (`api`): axum 路由 (`/graphql`, `/health`)
//!
//! # 模块结构
//!
//! ```text
//! staff-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # 密码哈希、JWT
//! ├── db/            # 数据库连接、模型、仓储
//! ├── services/      # 账户服务
//! ├── graphql/       # Query / Mutation
//! ├── api/           # HTTP 路由
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod graphql;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{HashedPassword, JwtService};
pub use core::{Config, Server, ServerState};
pub use graphql::{StaffSchema, build_schema};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境：加载 .env、读取配置，并按配置初始化日志
///
/// 日志级别与目录只从 [`Config`] 读取一次。
pub fn setup_environment() -> Result<Config, auth::JwtError> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    if config.jwt.ephemeral_secret {
        tracing::warn!("JWT_SECRET not set! Generated a temporary key for development.");
    }
    tracing::info!(environment = %config.environment, "Configuration loaded");

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   _____ __         ________
  / ___// /_____ _ / __/ __/
  \__ \/ __/ __ `// /_/ /_
 ___/ / /_/ /_/ // __/ __/
/____/\__/\__,_//_/ /_/
    "#
    );
}
