//! Character sheet server - Main entry point.

use std::sync::Arc;

use sheet_core::{seed_if_empty, CharacterService};
use sheet_server::{router, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let _ = dotenvy::from_filename(filename);
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "sheet_server=debug,sheet_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting character sheet server");

    let config = ServerConfig::from_env()?;

    let repository = config.build_repository()?;
    match &config.data_file {
        Some(path) => tracing::info!(path = %path.display(), "Persisting characters to JSON file"),
        None => tracing::info!("Using in-memory character store"),
    }

    if config.seed {
        let roster = config.roster()?;
        seed_if_empty(repository.as_ref(), roster)?;
    }

    let service = Arc::new(CharacterService::new(repository));
    let cors = config.cors_layer();
    if cors.is_some() {
        tracing::info!(origins = ?config.cors_allowed_origins, "CORS enabled");
    }
    let app = router(service, cors);

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
