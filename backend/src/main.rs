//! Construction Quotation Builder - Backend Server

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use construction_quotation_backend::store::{FileStore, KeyValueStore, MemoryStore};
use construction_quotation_backend::{config, create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "construction_quotation_backend=debug,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Construction Quotation Builder Server");
    tracing::info!("Environment: {}", config.environment);

    // Open the quotation store
    let store: Arc<dyn KeyValueStore> = match config.storage.backend.as_str() {
        "file" => {
            let store = FileStore::open(config.storage.data_dir.as_deref())?;
            tracing::info!("Using file-backed quotation store");
            Arc::new(store)
        }
        "memory" => {
            tracing::info!("Using in-memory quotation store");
            Arc::new(MemoryStore::new())
        }
        other => {
            anyhow::bail!("Unknown storage backend: {}", other);
        }
    };

    // Create application state
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
