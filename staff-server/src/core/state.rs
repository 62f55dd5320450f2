use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::{EmployeeRepository, UserRepository};
use crate::services::AccountService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 每个请求都是独立的工作单元；请求之间不共享可变状态。
/// 数据库句柄在启动时建立一次，通过 clone (内部引用计数) 注入到
/// GraphQL schema，而非模块级全局变量。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Any> | 数据库句柄 |
/// | jwt_service | Arc<JwtService> | JWT 签发服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库 (SurrealDB)
    pub db: Surreal<Any>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: Surreal<Any>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据库 (连接 + schema)
    /// 2. JWT 服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_service = DbService::new(&config.database).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db_service.db, jwt_service))
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Any> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn employees(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.get_db())
    }

    pub fn accounts(&self) -> AccountService {
        AccountService::new(UserRepository::new(self.get_db()), self.get_jwt_service())
    }
}
