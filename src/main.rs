use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use product_api::config::AppConfig;
use product_api::database::ProductStore;
use product_api::{app, AppState};

/// Command line overrides; anything not given falls back to the environment
#[derive(Parser, Debug)]
#[command(name = "product-api")]
#[command(about = "Product CRUD API over an embedded SQLite store")]
#[command(version)]
struct Args {
    #[arg(long, help = "Listen host (overrides PRODUCT_API_HOST / HOSTNAME)")]
    host: Option<String>,

    #[arg(long, help = "Listen port (overrides PRODUCT_API_PORT / PORT)")]
    port: Option<u16>,

    #[arg(long, help = "SQLite URL, e.g. sqlite::memory: or sqlite://products.db")]
    database_url: Option<String>,

    #[arg(long, help = "Start without the demonstration rows")]
    no_seed: bool,
}

impl Args {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = self.database_url {
            config.database.url = url;
        }
        if self.no_seed {
            config.database.seed = false;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up PORT, DATABASE_URL, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_api=info,tower_http=info")),
        )
        .init();

    let config = Args::parse().apply(product_api::config::config().clone());
    tracing::info!("Starting Product API in {:?} mode", config.environment);

    let store = ProductStore::open(&config.database)
        .await
        .context("failed to open product database")?;

    let bind_addr = config.bind_addr();
    let app = app(AppState::new(store.clone(), config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Product API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
