//! LibVault API server.
//!
//! Usage:
//!   libvaultd --bind 0.0.0.0:8000 --data-dir ./data
//!
//! Without `--data-dir` (or `LIBVAULT_DATA_DIR`) the server runs against
//! an in-memory store and loses its records on restart.

use clap::Parser;
use libvault_schema::SchemaRegistry;
use libvault_server::{build_router, AppState, ServerConfig};
use libvault_store::{DocumentStore, StoreConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "libvaultd")]
#[command(author, version, about = "LibVault library-management API server")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(short, long, default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Directory for persisted collections (overrides LIBVAULT_DATA_DIR)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Disable the permissive CORS layer
    #[arg(long)]
    no_cors: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut store_config = StoreConfig::from_env();
    if let Some(dir) = args.data_dir {
        store_config = store_config.data_dir(dir);
    }
    match &store_config.data_dir {
        Some(dir) => info!("persisting collections under {}", dir.display()),
        None => info!("no data directory configured, using in-memory store"),
    }

    // A broken data directory must not kill startup; the store reports
    // unavailability per call instead.
    let store = DocumentStore::open_or_unavailable(store_config);
    let state = Arc::new(AppState::new(store, SchemaRegistry::builtin()));

    let server_config = ServerConfig::new(args.bind).with_permissive_cors(!args.no_cors);
    let mut router = build_router(state).layer(TraceLayer::new_for_http());
    if server_config.permissive_cors {
        router = router.layer(CorsLayer::permissive());
    }

    let listener = tokio::net::TcpListener::bind(server_config.bind_addr).await?;
    info!("LibVault API listening on {}", server_config.bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
