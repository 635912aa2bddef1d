use thiserror::Error;

/// Server lifecycle errors (startup, bind, shutdown)
///
/// Request-level failures use [`crate::utils::AppError`] instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database initialization failed: {0}")]
    Database(String),

    #[error("Invalid bind address: {0}")]
    Address(String),

    #[error("HTTP server failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
