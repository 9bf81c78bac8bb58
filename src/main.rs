use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wedding_invitations::repositories::InvitationRepository;
use wedding_invitations::{AppState, Config, Connector, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    // Il primo connect fallisce subito se il database non è raggiungibile
    let connector = Arc::new(Connector::mongo(&config));
    connector.connect().await.inspect_err(|e| error!("Unable to reach the database: {}", e))?;

    let repository = InvitationRepository::new(connector.clone());
    repository.ensure_indexes().await?;

    // Crea il router
    let state = Arc::new(AppState::new(repository, config.max_page_limit));
    let app = create_router(state);

    // Crea il listener TCP
    let listener = TcpListener::bind(config.server_address()).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    // Avvia il server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    connector.shutdown().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
