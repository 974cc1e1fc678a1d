//! Blocking HTTP client for the RoadSafe server API.

use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use roadsafe_core::{GeoPoint, HotspotMarker, PredictionContext, RouteRiskReport};

#[derive(Debug, Serialize)]
struct RouteRiskRequest<'a> {
    origin: GeoPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination: Option<GeoPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spacing_m: Option<f64>,
}

#[derive(Debug, Serialize)]
struct HotspotRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    point: Option<GeoPoint>,
}

/// Route risk response as returned by `/v1/routes/risk`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRiskResponse {
    pub destination: GeoPoint,
    pub context: PredictionContext,
    #[serde(flatten)]
    pub report: RouteRiskReport,
}

pub struct RoadSafeClient {
    client: Client,
    base_url: String,
}

impl RoadSafeClient {
    /// Create a client for the server at `base_url` (e.g. "http://localhost:3000").
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Score the route from `origin` to a destination given as a point or an address.
    pub fn route_risk(
        &self,
        origin: GeoPoint,
        destination: Option<GeoPoint>,
        destination_address: Option<&str>,
        spacing_m: Option<f64>,
    ) -> Result<RouteRiskResponse> {
        let body = RouteRiskRequest {
            origin,
            destination,
            destination_address,
            spacing_m,
        };
        self.post("/v1/routes/risk", &body)
    }

    pub fn hotspot(&self, address: Option<&str>, point: Option<GeoPoint>) -> Result<HotspotMarker> {
        self.post("/v1/hotspots", &HotspotRequest { address, point })
    }

    /// Fetch the report export in `format` ("json" or "csv") as raw text.
    pub fn export_reports(&self, format: &str, status: Option<&str>) -> Result<String> {
        let url = format!("{}/v1/reports/export", self.base_url);
        let mut query = vec![("format", format)];
        if let Some(status) = status {
            query.push(("status", status));
        }
        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .with_context(|| format!("failed to reach {}", url))?;

        check_status(response)?
            .text()
            .with_context(|| format!("unexpected response from {}", url))
    }

    fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .with_context(|| format!("failed to reach {}", url))?;

        check_status(response)?
            .json()
            .with_context(|| format!("unexpected response from {}", url))
    }
}

/// Turn a non-success response into an error carrying the server's message.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<Value>()
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| status.to_string());
    bail!("{} ({})", message, status.as_u16());
}
