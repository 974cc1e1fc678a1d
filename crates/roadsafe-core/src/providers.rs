//! Seams to the external services the pipeline depends on.
//!
//! Concrete HTTP implementations live in `roadsafe-providers`; tests plug
//! in in-memory fakes.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{GeoPoint, PredictionContext, Route, WeatherSnapshot};

/// Failure of a single hazard prediction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OracleError {
    #[error("risk oracle request failed: {0}")]
    Transport(String),
    #[error("risk oracle returned HTTP {0}")]
    Status(u16),
    #[error("risk oracle response malformed: {0}")]
    Malformed(String),
}

/// Failure of a geocoding, directions or weather lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(String),
    #[error("provider returned HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    NotFound(String),
    #[error("provider response malformed: {0}")]
    Malformed(String),
}

/// Hazard model returning a probability in [0, 1] for a place and time.
#[async_trait]
pub trait RiskOracle: Send + Sync {
    async fn predict(
        &self,
        point: GeoPoint,
        context: PredictionContext,
    ) -> Result<f64, OracleError>;
}

/// Driving directions between two points.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn route(&self, origin: GeoPoint, destination: GeoPoint) -> Result<Route, ProviderError>;
}

/// Free-text address to coordinate lookup.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, ProviderError>;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, point: GeoPoint) -> Result<WeatherSnapshot, ProviderError>;
}
