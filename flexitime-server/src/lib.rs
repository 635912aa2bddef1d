//! Flexitime Server - employee records and flexitime ledgers over REST
//!
//! # Module structure
//!
//! ```text
//! flexitime-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── api/           # HTTP handlers
//! ├── routes/        # router assembly and middleware
//! ├── db/            # SurrealDB service, models, repositories
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod routes;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use db::repository::{EmployeeRepository, EmployeeStore, RepoError, RepoResult};
pub use routes::build_app;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env` (if any) and initialize logging from the environment
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    config
}
