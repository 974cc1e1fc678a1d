//! Distance-based route thinning.
//!
//! Directions providers return dense geometry; querying the hazard model at
//! every vertex is wasteful, so the route is reduced to vertices roughly
//! `spacing_m` apart before annotation.

use thiserror::Error;

use crate::models::{GeoPoint, Route};
use crate::spatial::distance;

/// Spacing used when a request does not ask for one.
pub const DEFAULT_SAMPLE_SPACING_M: f64 = 500.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("sample spacing must be a positive number of meters, got {0}")]
    InvalidSpacing(f64),
}

/// Reduce a route to vertices approximately `spacing_m` apart.
///
/// Only original vertices are kept, in order. The first vertex is always
/// kept and the last is appended when it is not coordinate-equal to the
/// last kept one. A single long leg can produce a gap wider than
/// `spacing_m`.
pub fn sample_route(route: &[GeoPoint], spacing_m: f64) -> Result<Route, SamplingError> {
    if !spacing_m.is_finite() || spacing_m <= 0.0 {
        return Err(SamplingError::InvalidSpacing(spacing_m));
    }

    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return Ok(Vec::new());
    };

    let mut sampled = vec![first];
    let mut last_kept = first;
    let mut accumulated_m = 0.0;

    for pair in route.windows(2) {
        accumulated_m += distance(&pair[0], &pair[1]);
        if accumulated_m >= spacing_m {
            sampled.push(pair[1]);
            last_kept = pair[1];
            accumulated_m = 0.0;
        }
    }

    if last_kept != last {
        sampled.push(last);
    }

    tracing::debug!(
        "Sampled {} points from route of length {}",
        sampled.len(),
        route.len()
    );

    Ok(sampled)
}
