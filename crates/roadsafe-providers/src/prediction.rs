//! Hotspot prediction service client.
//!
//! The service takes `{latitude, longitude, hour, month, day}` and answers
//! with the positive-class probability of the hotspot model.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use roadsafe_core::{GeoPoint, OracleError, PredictionContext, RiskOracle};

use crate::{build_http_client, trim_base_url};

pub const DEFAULT_PREDICTION_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Serialize)]
struct PredictionRequest {
    latitude: f64,
    longitude: f64,
    hour: u32,
    month: u32,
    /// Day of week, Sunday = 0
    day: u32,
}

/// HTTP risk oracle backed by the prediction service.
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: trim_base_url(base_url),
        })
    }
}

#[async_trait]
impl RiskOracle for PredictionClient {
    async fn predict(
        &self,
        point: GeoPoint,
        context: PredictionContext,
    ) -> Result<f64, OracleError> {
        let url = format!("{}/predict_hotspot", self.base_url);
        let request = PredictionRequest {
            latitude: point.latitude,
            longitude: point.longitude,
            hour: context.hour,
            month: context.month,
            day: context.weekday,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| OracleError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status(status.as_u16()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| OracleError::Malformed(err.to_string()))?;

        let probability = parse_prediction_response(&payload)?;
        tracing::trace!(
            "Prediction at ({:.5}, {:.5}): {:.3}",
            point.latitude,
            point.longitude,
            probability
        );
        Ok(probability)
    }
}

/// Read the probability out of a prediction response.
///
/// The service reports model failures as `{"error": ...}` with a success
/// status. A body with neither field counts as probability 0.
pub fn parse_prediction_response(payload: &Value) -> Result<f64, OracleError> {
    if let Some(error) = payload.get("error") {
        return Err(OracleError::Malformed(format!("service error: {}", error)));
    }

    match payload.get("probability") {
        None | Some(Value::Null) => Ok(0.0),
        Some(value) => {
            let probability = value
                .as_f64()
                .filter(|p| p.is_finite())
                .ok_or_else(|| OracleError::Malformed(format!("bad probability {}", value)))?;
            Ok(probability.clamp(0.0, 1.0))
        }
    }
}
