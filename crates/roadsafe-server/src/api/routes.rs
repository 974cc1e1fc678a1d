//! REST API routes.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::{hotspots, petitions, reports, request_id, risk};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    let risk_routes = Router::new()
        .route("/v1/routes/risk", post(risk::route_risk))
        .route(
            "/v1/hotspots",
            post(hotspots::predict_hotspot).get(hotspots::list_hotspots),
        );

    let report_routes = Router::new()
        .route(
            "/v1/reports",
            post(reports::create_report).get(reports::list_reports),
        )
        .route("/v1/reports/export", get(reports::export_reports))
        .route("/v1/reports/hotspots", get(reports::report_hotspots))
        .route("/v1/reports/:id", get(reports::get_report));

    let petition_routes = Router::new().route(
        "/v1/petitions",
        post(petitions::create_petition).get(petitions::list_petitions),
    );

    risk_routes
        .merge(report_routes)
        .merge(petition_routes)
        .layer(middleware::from_fn(request_id::ensure_request_id))
}
