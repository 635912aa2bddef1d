//! Server Implementation
//!
//! HTTP server startup and graceful shutdown

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::routes::build_app;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl-C, then drain in-flight requests
    ///
    /// The state (and with it the database handle) is dropped on return.
    pub async fn run(self) -> Result<()> {
        self.run_until(tokio::signal::ctrl_c()).await
    }

    /// Serve until `signal` resolves. A failed signal also stops the server.
    pub async fn run_until<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = io::Result<()>> + Send + 'static,
    {
        let addr: SocketAddr = format!("{}:{}", self.config.http_host, self.config.http_port)
            .parse()
            .map_err(|e| ServerError::Address(format!("{e}")))?;

        let app = build_app(self.state);

        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();
        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);
        tokio::spawn(async move {
            match signal.await {
                Ok(()) => tracing::info!("Shutting down..."),
                Err(e) => tracing::error!(error = %e, "Shutdown signal failed, shutting down"),
            }
            shutdown_handle.graceful_shutdown(Some(grace));
        });

        tracing::info!("Flexitime server listening on {}", addr);

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;

        tracing::info!("Server stopped, database connection released");
        Ok(())
    }
}
