use crate::auth::{JwtConfig, JwtError};

/// 数据库连接配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SurrealDB 端点 (mem:// | rocksdb://path | ws://host:port)
    pub url: String,
    /// 命名空间
    pub namespace: String,
    /// 数据库名
    pub database: String,
    /// Root 用户名 (远程引擎)
    pub username: Option<String>,
    /// Root 密码 (远程引擎)
    pub password: Option<String>,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "rocksdb://data/staff.db".into()),
            namespace: std::env::var("DATABASE_NS").unwrap_or_else(|_| "staff".into()),
            database: std::env::var("DATABASE_DB").unwrap_or_else(|_| "staff".into()),
            username: std::env::var("DATABASE_USER").ok(),
            password: std::env::var("DATABASE_PASS").ok(),
        }
    }

    /// 指定端点，其余使用默认值
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            namespace: "staff".into(),
            database: "staff".into(),
            username: None,
            password: None,
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 4000 | HTTP 服务端口 |
/// | DATABASE_URL | rocksdb://data/staff.db | SurrealDB 端点 |
/// | DATABASE_NS / DATABASE_DB | staff / staff | 命名空间 / 数据库 |
/// | DATABASE_USER / DATABASE_PASS | - | 远程引擎 Root 凭据 |
/// | JWT_SECRET | (debug 下随机生成) | 令牌签名密钥 |
/// | ENABLE_PLAYGROUND | false | GET /graphql 提供 GraphiQL |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=mem:// HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据库配置
    pub database: DatabaseConfig,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 是否提供 GraphiQL 页面
    pub enable_playground: bool,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值；JWT 密钥缺失时按 [`JwtConfig::from_env`] 处理
    pub fn from_env() -> Result<Self, JwtError> {
        Ok(Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env()?,
            enable_playground: std::env::var("ENABLE_PLAYGROUND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        })
    }

    /// 使用自定义值构造配置，不读取环境变量
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_url: impl Into<String>, jwt: JwtConfig) -> Self {
        Self {
            http_host: "127.0.0.1".into(),
            http_port: 0,
            database: DatabaseConfig::with_url(database_url),
            jwt,
            enable_playground: false,
            environment: "test".into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }

    /// 监听地址字符串
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
