//! Per-point hazard annotation.
//!
//! Queries the risk oracle for each sampled point as a bounded concurrent
//! fan-out. A failed lookup degrades that one point to probability 0 so the
//! rest of the route can still be colored.

use futures::stream::{self, StreamExt};

use crate::models::{GeoPoint, PredictionContext, RiskSample};
use crate::providers::{OracleError, RiskOracle};

/// Maximum number of oracle requests in flight for one route.
pub const DEFAULT_ORACLE_CONCURRENCY: usize = 8;

/// Pair each point with its predicted risk, in input order.
///
/// Never fails: oracle errors are logged and replaced by a zero probability.
/// Dropping the returned future cancels the outstanding requests.
pub async fn annotate<O>(
    points: &[GeoPoint],
    context: PredictionContext,
    oracle: &O,
    concurrency: usize,
) -> Vec<RiskSample>
where
    O: RiskOracle + ?Sized,
{
    stream::iter(points.iter().copied().enumerate())
        .map(|(index, point)| async move {
            match oracle.predict(point, context).await {
                Ok(probability) => RiskSample::from_probability(point, probability),
                Err(err) => {
                    tracing::warn!(
                        index,
                        "Risk prediction failed at ({:.5}, {:.5}), defaulting to 0: {}",
                        point.latitude,
                        point.longitude,
                        err
                    );
                    RiskSample::from_probability(point, 0.0)
                }
            }
        })
        // `buffered` yields in submission order regardless of completion order
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// Predict a single location, surfacing the oracle error to the caller.
pub async fn predict_point<O>(
    point: GeoPoint,
    context: PredictionContext,
    oracle: &O,
) -> Result<RiskSample, OracleError>
where
    O: RiskOracle + ?Sized,
{
    let probability = oracle.predict(point, context).await?;
    Ok(RiskSample::from_probability(point, probability))
}
