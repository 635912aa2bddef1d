/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_HOST | 0.0.0.0 | Bind address |
/// | HTTP_PORT | 3000 | HTTP port |
/// | API_PREFIX | /api/v1 | Common path prefix for all routes |
/// | DATABASE_PATH | memory | `memory` or a RocksDB directory |
/// | DB_NAMESPACE | flexitime | SurrealDB namespace |
/// | DB_NAME | flexitime | SurrealDB database |
/// | ENVIRONMENT | development | development, test or production |
/// | LOG_LEVEL | info | Default log filter when RUST_LOG is unset |
/// | LOG_JSON | false | Emit JSON log lines |
/// | LOG_DIR | (unset) | Daily rolling log file directory |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | Graceful shutdown period (ms) |
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/var/lib/flexitime/db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    /// Prefix every route is nested under
    pub api_prefix: String,
    /// `memory` selects the in-memory engine
    pub database_path: String,
    pub db_namespace: String,
    pub db_name: String,
    /// development | test | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub shutdown_timeout_ms: u64,
}

/// Sentinel `DATABASE_PATH` value for the in-memory engine
pub const MEMORY_DATABASE: &str = "memory";

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            api_prefix: std::env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1".into()),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| MEMORY_DATABASE.into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "flexitime".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "flexitime".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok(),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// In-memory configuration for tests, independent of the environment
    pub fn for_tests() -> Self {
        Self {
            http_host: "127.0.0.1".into(),
            http_port: 0,
            api_prefix: "/api/v1".into(),
            database_path: MEMORY_DATABASE.into(),
            db_namespace: "test".into(),
            db_name: "test".into(),
            environment: "test".into(),
            log_level: "debug".into(),
            log_json: false,
            log_dir: None,
            shutdown_timeout_ms: 1000,
        }
    }

    /// Whether the store lives only in memory
    pub fn is_in_memory(&self) -> bool {
        self.database_path == MEMORY_DATABASE
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
