//! Database Module
//!
//! Handles the SurrealDB connection and schema bootstrap.
//!
//! The endpoint scheme picks the engine: `mem://` (tests), `rocksdb://path`
//! (embedded, default) or `ws://host:port` (remote server).

pub mod models;
pub mod repository;

use crate::core::config::DatabaseConfig;
use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

/// Table, field and index definitions; idempotent
const SCHEMA: &str = include_str!("schema.surql");

/// Database service, owns the process-wide SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect, select namespace/database and apply the schema
    pub async fn new(config: &DatabaseConfig) -> Result<Self, AppError> {
        let db = any::connect(config.url.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await
            .map_err(|e| AppError::database(format!("Failed to sign in: {e}")))?;
        }

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        tracing::info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Database connection established"
        );

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }

    /// Check that the store is reachable
    pub async fn health(db: &Surreal<Any>) -> bool {
        db.health().await.is_ok()
    }
}
