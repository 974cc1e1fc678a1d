//! Route risk endpoint.
//!
//! Resolves the destination, fetches a driving route from the user's
//! location and colors it by predicted wildlife hazard.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use roadsafe_core::{assess_trip, GeoPoint, PredictionContext, RouteRiskReport};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RouteRiskRequest {
    /// Where the user is now
    pub origin: GeoPoint,
    /// Destination coordinates; takes precedence over the address
    pub destination: Option<GeoPoint>,
    pub destination_address: Option<String>,
    /// Override of the configured sample spacing
    pub spacing_m: Option<f64>,
    /// Defaults to the server's local time
    pub context: Option<PredictionContext>,
}

#[derive(Debug, Serialize)]
pub struct RouteRiskResponse {
    pub destination: GeoPoint,
    pub context: PredictionContext,
    #[serde(flatten)]
    pub report: RouteRiskReport,
}

/// Resolve a destination from coordinates or a free-text address.
pub(crate) async fn resolve_destination(
    state: &AppState,
    point: Option<GeoPoint>,
    address: Option<&str>,
) -> Result<GeoPoint, ApiError> {
    if let Some(point) = point {
        return Ok(point);
    }
    match address.map(str::trim).filter(|a| !a.is_empty()) {
        Some(address) => Ok(state.geocoder().geocode(address).await?),
        None => Err(ApiError::BadRequest("Please enter an address.".to_string())),
    }
}

pub async fn route_risk(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<RouteRiskRequest>,
) -> Result<Json<RouteRiskResponse>, ApiError> {
    let context = req.context.unwrap_or_else(PredictionContext::now);
    context.validate()?;
    let destination =
        resolve_destination(&state, req.destination, req.destination_address.as_deref()).await?;
    let pipeline = state.config().pipeline(req.spacing_m);

    let report = assess_trip(
        state.directions(),
        state.oracle(),
        req.origin,
        destination,
        context,
        pipeline,
    )
    .await?;

    tracing::info!(
        "Route risk: {} route points, {} sampled, {} segments, highest {:?}",
        report.route_points,
        report.sampled_points.len(),
        report.segments.len(),
        report.highest_tier
    );

    Ok(Json(RouteRiskResponse {
        destination,
        context,
        report,
    }))
}
