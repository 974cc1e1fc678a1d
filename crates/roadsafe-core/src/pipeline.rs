//! Route risk pipeline: sample, annotate, color.
//!
//! Each stage takes the previous stage's output by reference and returns a
//! new value; nothing is shared between requests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::annotate::{annotate, DEFAULT_ORACLE_CONCURRENCY};
use crate::models::{GeoPoint, PredictionContext, RiskSample, RouteSegment};
use crate::providers::{DirectionsProvider, ProviderError, RiskOracle};
use crate::risk::RiskTier;
use crate::sampling::{sample_route, SamplingError, DEFAULT_SAMPLE_SPACING_M};
use crate::segments::color_segments;
use crate::spatial::route_length_m;

#[derive(Debug, Error)]
pub enum RouteRiskError {
    #[error(transparent)]
    Sampling(#[from] SamplingError),
    #[error("route lookup failed: {0}")]
    Route(#[source] ProviderError),
}

/// Tunables for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub spacing_m: f64,
    pub concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            spacing_m: DEFAULT_SAMPLE_SPACING_M,
            concurrency: DEFAULT_ORACLE_CONCURRENCY,
        }
    }
}

/// Everything produced for one route search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRiskReport {
    /// Vertex count of the route geometry before sampling
    pub route_points: usize,
    pub distance_m: f64,
    pub sampled_points: Vec<GeoPoint>,
    pub samples: Vec<RiskSample>,
    pub segments: Vec<RouteSegment>,
    /// Most severe tier on the route, `None` for an empty route
    pub highest_tier: Option<RiskTier>,
}

/// Run the pipeline over already-fetched route geometry.
pub async fn assess_route<O>(
    route: &[GeoPoint],
    context: PredictionContext,
    oracle: &O,
    config: PipelineConfig,
) -> Result<RouteRiskReport, SamplingError>
where
    O: RiskOracle + ?Sized,
{
    let sampled_points = sample_route(route, config.spacing_m)?;
    let samples = annotate(&sampled_points, context, oracle, config.concurrency).await;
    let segments = color_segments(&samples);
    let highest_tier = samples.iter().map(|s| s.tier).max();

    tracing::debug!(
        route_points = route.len(),
        sampled = sampled_points.len(),
        segments = segments.len(),
        "Route risk assessed"
    );

    Ok(RouteRiskReport {
        route_points: route.len(),
        distance_m: route_length_m(route),
        sampled_points,
        samples,
        segments,
        highest_tier,
    })
}

/// Fetch a driving route and run the pipeline over it.
///
/// Spacing is checked before the directions provider is called so a bad
/// request never costs a round trip.
pub async fn assess_trip<D, O>(
    directions: &D,
    oracle: &O,
    origin: GeoPoint,
    destination: GeoPoint,
    context: PredictionContext,
    config: PipelineConfig,
) -> Result<RouteRiskReport, RouteRiskError>
where
    D: DirectionsProvider + ?Sized,
    O: RiskOracle + ?Sized,
{
    if !config.spacing_m.is_finite() || config.spacing_m <= 0.0 {
        return Err(SamplingError::InvalidSpacing(config.spacing_m).into());
    }

    let route = directions
        .route(origin, destination)
        .await
        .map_err(RouteRiskError::Route)?;

    Ok(assess_route(&route, context, oracle, config).await?)
}
