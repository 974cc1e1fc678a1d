//! Single-location hotspot predictions.

use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use roadsafe_core::{predict_point, GeoPoint, HotspotMarker, PredictionContext};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::risk::resolve_destination;
use crate::state::AppState;

const CLICKED_PLACE_NAME: &str = "Clicked Location";

#[derive(Debug, Deserialize)]
pub struct HotspotRequest {
    /// Free-text place to look up
    pub address: Option<String>,
    /// Map click; takes precedence over the address
    pub point: Option<GeoPoint>,
    pub context: Option<PredictionContext>,
}

/// Predict the hazard at one place and keep the marker for display.
pub async fn predict_hotspot(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<HotspotRequest>,
) -> Result<Json<HotspotMarker>, ApiError> {
    let context = req.context.unwrap_or_else(PredictionContext::now);
    context.validate()?;
    let place_name = match (&req.point, req.address.as_deref().map(str::trim)) {
        (Some(_), _) => CLICKED_PLACE_NAME.to_string(),
        (None, Some(address)) => address.to_string(),
        (None, None) => String::new(),
    };
    let point = resolve_destination(&state, req.point, req.address.as_deref()).await?;

    let sample = predict_point(point, context, state.oracle())
        .await
        .map_err(|err| {
            tracing::warn!("Hotspot prediction failed for '{}': {}", place_name, err);
            ApiError::Upstream("Failed to get hotspot prediction for this location.".to_string())
        })?;

    let marker = HotspotMarker::new(place_name, point, sample.probability);
    tracing::info!(
        "Hotspot '{}': {:.0}% ({})",
        marker.place_name,
        marker.probability * 100.0,
        marker.tier
    );
    state.record_hotspot(marker.clone());

    Ok(Json(marker))
}

/// Markers predicted so far, oldest first.
pub async fn list_hotspots(State(state): State<Arc<AppState>>) -> Json<Vec<HotspotMarker>> {
    Json(state.get_hotspots())
}
