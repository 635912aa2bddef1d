//! Database Module
//!
//! Opens the embedded SurrealDB instance and applies the schema.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::core::{Config, ServerError};

/// Table holding employee documents
pub const EMPLOYEE_TABLE: &str = "employee";

/// Idempotent schema. The table stays schemaless so embedded flexitime
/// entries are stored as plain objects; email uniqueness is the store's job.
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
DEFINE INDEX IF NOT EXISTS employee_email_unique ON TABLE employee FIELDS email UNIQUE;
"#;

/// Database service - owns the SurrealDB handle
///
/// Cloning is cheap; all clones share one connection. The connection is
/// released when the last clone is dropped.
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the configured engine, select namespace/database, apply the schema
    pub async fn open(config: &Config) -> Result<Self, ServerError> {
        let db = if config.is_in_memory() {
            Surreal::new::<Mem>(()).await
        } else {
            Surreal::new::<RocksDb>(config.database_path.as_str()).await
        }
        .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;

        db.use_ns(config.db_namespace.as_str())
            .use_db(config.db_name.as_str())
            .await
            .map_err(|e| ServerError::Database(format!("Failed to select database: {e}")))?;

        tracing::info!(
            path = %config.database_path,
            namespace = %config.db_namespace,
            database = %config.db_name,
            "Database connection established"
        );

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| ServerError::Database(format!("Failed to apply schema: {e}")))?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }
}
