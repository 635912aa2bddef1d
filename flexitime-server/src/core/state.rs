use std::sync::Arc;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::{EmployeeRepository, EmployeeStore};

/// Server state - shared by every request handler
///
/// Cloning is cheap (`Arc` inside). The employee store is injected so the
/// handlers never touch the database directly.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Server configuration (immutable) |
/// | employees | Employee persistence |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub employees: Arc<dyn EmployeeStore>,
}

impl ServerState {
    /// Build state around an existing store
    pub fn new(config: Config, employees: Arc<dyn EmployeeStore>) -> Self {
        Self { config, employees }
    }

    /// Open the configured database and wire the SurrealDB-backed store
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::open(config).await?;
        let employees = Arc::new(EmployeeRepository::new(db.db)) as Arc<dyn EmployeeStore>;
        Ok(Self::new(config.clone(), employees))
    }
}
