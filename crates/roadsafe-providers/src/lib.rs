//! RoadSafe providers - HTTP clients for external services
//!
//! Implements the `roadsafe-core` provider traits against openrouteservice
//! (geocoding and driving directions), the hotspot prediction service and
//! OpenWeatherMap.

pub mod ors;
pub mod prediction;
pub mod weather;

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

pub use ors::OrsClient;
pub use prediction::PredictionClient;
pub use weather::WeatherClient;

pub(crate) fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to create HTTP client")
}

pub(crate) fn trim_base_url(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}
