//! RoadSafe server - wildlife hazard routing, hotspots, reports and petitions

mod api;
mod cache;
mod config;
mod state;

use anyhow::Result;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::state::{AppState, Services};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roadsafe_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting RoadSafe Server...");

    let config = Config::from_env();
    let port = config.server_port;
    let services = Services::from_config(&config)?;
    tracing::info!(
        spacing_m = config.route_sample_spacing_m,
        concurrency = config.oracle_concurrency,
        prediction_url = %config.prediction_url,
        "Route risk pipeline configured"
    );
    let state = Arc::new(AppState::new(config, services));

    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
