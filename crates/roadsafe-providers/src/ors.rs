//! openrouteservice geocoding and driving directions client.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use roadsafe_core::{DirectionsProvider, GeoPoint, Geocoder, ProviderError, Route};

use crate::{build_http_client, trim_base_url};

pub const DEFAULT_ORS_BASE_URL: &str = "https://api.openrouteservice.org";

const NO_GEOCODE_RESULT: &str = "No results found for the address.";
const NO_ROUTE_RESULT: &str = "No route found.";

/// HTTP client for the openrouteservice API.
pub struct OrsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OrsClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: trim_base_url(base_url),
            api_key: api_key.into(),
        })
    }

    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, ProviderError> {
        let response = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("openrouteservice HTTP {} for {}: {}", status, url, body);
            return Err(ProviderError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| ProviderError::Malformed(err.to_string()))
    }
}

#[async_trait]
impl Geocoder for OrsClient {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, ProviderError> {
        let url = format!("{}/geocode/search", self.base_url);
        let payload = self
            .get_json(
                &url,
                &[("text", address.to_string()), ("size", "1".to_string())],
            )
            .await?;
        let point = parse_geocode_response(&payload)?;
        tracing::debug!(
            "Geocoded '{}' to ({:.5}, {:.5})",
            address,
            point.latitude,
            point.longitude
        );
        Ok(point)
    }
}

#[async_trait]
impl DirectionsProvider for OrsClient {
    async fn route(&self, origin: GeoPoint, destination: GeoPoint) -> Result<Route, ProviderError> {
        let url = format!("{}/v2/directions/driving-car", self.base_url);
        let payload = self
            .get_json(
                &url,
                &[
                    ("start", lon_lat_param(&origin)),
                    ("end", lon_lat_param(&destination)),
                ],
            )
            .await?;
        parse_directions_response(&payload)
    }
}

/// openrouteservice takes and returns coordinates as `lon,lat`.
fn lon_lat_param(point: &GeoPoint) -> String {
    format!("{},{}", point.longitude, point.latitude)
}

fn first_feature_geometry(payload: &Value) -> Option<&Value> {
    payload
        .get("features")
        .and_then(Value::as_array)
        .and_then(|features| features.first())
        .and_then(|feature| feature.get("geometry"))
        .filter(|geometry| !geometry.is_null())
}

fn parse_lon_lat(value: &Value) -> Result<GeoPoint, ProviderError> {
    let pair = value
        .as_array()
        .filter(|pair| pair.len() >= 2)
        .ok_or_else(|| ProviderError::Malformed(format!("expected [lon, lat], got {}", value)))?;
    match (pair[0].as_f64(), pair[1].as_f64()) {
        (Some(lon), Some(lat)) => Ok(GeoPoint::new(lat, lon)),
        _ => Err(ProviderError::Malformed(format!(
            "non-numeric coordinate {}",
            value
        ))),
    }
}

/// Extract the first feature's point from a geocode search response.
pub fn parse_geocode_response(payload: &Value) -> Result<GeoPoint, ProviderError> {
    let geometry = first_feature_geometry(payload)
        .ok_or_else(|| ProviderError::NotFound(NO_GEOCODE_RESULT.to_string()))?;
    let coordinates = geometry
        .get("coordinates")
        .ok_or_else(|| ProviderError::Malformed("geometry missing coordinates".to_string()))?;
    parse_lon_lat(coordinates)
}

/// Extract the line geometry of the first route in a directions response.
pub fn parse_directions_response(payload: &Value) -> Result<Route, ProviderError> {
    let geometry = first_feature_geometry(payload)
        .ok_or_else(|| ProviderError::NotFound(NO_ROUTE_RESULT.to_string()))?;
    let coordinates = geometry
        .get("coordinates")
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::Malformed("geometry missing coordinates".to_string()))?;
    coordinates.iter().map(parse_lon_lat).collect()
}
