use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use placement_api::config::Config;
use placement_api::recognition::SubstringRecognizer;
use placement_api::registry::Registry;
use placement_api::routes::build_router;
use placement_api::state::AppState;
use placement_api::store::JsonStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Placement API v{}", env!("CARGO_PKG_VERSION"));

    std::fs::create_dir_all(&config.data_dir)?;
    std::fs::create_dir_all(&config.upload_dir)?;

    // Load both registries wholesale; missing or corrupt documents degrade
    // to empty rather than failing startup.
    let store = JsonStore::new(config.data_dir.clone());
    let registry = Registry::load(store);
    info!(
        "Registry loaded: {} companies, {} known skills",
        registry.companies.len(),
        registry.skills.keywords().len()
    );

    let state = AppState {
        registry: Arc::new(Mutex::new(registry)),
        recognizer: Arc::new(SubstringRecognizer),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
