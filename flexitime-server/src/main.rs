use flexitime_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging) and configuration
    let config = setup_environment();

    tracing::info!(environment = %config.environment, "Flexitime server starting...");

    // 2. Open the database and wire the store
    let state = ServerState::initialize(&config).await?;

    // 3. Serve until Ctrl-C
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
