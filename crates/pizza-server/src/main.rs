use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use pizza_core::MemoryStore;
use pizza_db::{FileStore, StoreConfig};
use pizza_server::routes;
use pizza_server::state::{AppState, Backend};

#[derive(Parser)]
#[command(name = "pizza-server", version, about = "Pizza orders and authorization REST API")]
struct Args {
    /// Address to bind
    #[arg(long, env = "PIZZA_SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PIZZA_SERVER_PORT", default_value_t = 3000)]
    port: u16,

    /// JSON document file (defaults to PIZZA_DB_PATH, then db.json)
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Keep records in memory only
    #[arg(long, default_value_t = false, conflicts_with = "db_path")]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pizza=info".parse()?))
        .with_target(false)
        .init();

    let args = Args::parse();
    let addr = format!("{}:{}", args.host, args.port);

    let store = if args.in_memory {
        tracing::info!("Using in-memory store");
        Backend::Memory(MemoryStore::new())
    } else {
        let config = match args.db_path {
            Some(path) => StoreConfig::new(path),
            None => StoreConfig::from_env()?,
        };
        Backend::File(FileStore::open(&config).await?)
    };

    let state = Arc::new(AppState::new(store));

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
