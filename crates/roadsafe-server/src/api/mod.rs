//! API routes for the RoadSafe server.

pub mod error;
pub mod extract;
pub mod hotspots;
pub mod petitions;
pub mod reports;
pub mod request_id;
pub mod risk;
mod routes;

use axum::Router;

pub fn routes() -> Router<std::sync::Arc<crate::state::AppState>> {
    routes::create_router()
}
