mod config;
mod errors;
mod generation;
mod intake;
mod models;
mod portfolio;
mod render;
mod routes;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::extractor::SimulatedExtractor;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{MemoryStore, PortfolioStore, RedisStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; malformed values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumify v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;
    info!("Portfolio store: {}", store.backend());

    let extractor = Arc::new(SimulatedExtractor {
        delay: config.extraction_delay,
    });
    info!("Simulated extraction delay: {:?}", config.extraction_delay);

    let state = AppState::new(store, extractor, config.clone());

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Redis when `REDIS_URL` is set, process memory otherwise.
async fn build_store(config: &Config) -> Result<Arc<dyn PortfolioStore>> {
    match &config.redis_url {
        Some(url) => {
            let store = RedisStore::connect(url, config.portfolio_ttl)
                .await
                .context("failed to connect to Redis")?;
            Ok(Arc::new(store))
        }
        None => Ok(Arc::new(MemoryStore::new(config.portfolio_ttl))),
    }
}
