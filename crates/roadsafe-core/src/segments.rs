//! Route segment coloring.

use crate::models::{RiskSample, RouteSegment};

/// One segment per adjacent pair of samples, colored by the more severe endpoint.
///
/// Segments are never merged, even when neighbours share a tier.
pub fn color_segments(samples: &[RiskSample]) -> Vec<RouteSegment> {
    samples
        .windows(2)
        .map(|pair| RouteSegment {
            from: pair[0].point,
            to: pair[1].point,
            tier: pair[0].tier.max(pair[1].tier),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;
    use crate::risk::RiskTier;

    fn sample(lat: f64, probability: f64) -> RiskSample {
        RiskSample::from_probability(GeoPoint::new(lat, 0.0), probability)
    }

    #[test]
    fn fewer_than_two_samples_yield_nothing() {
        assert!(color_segments(&[]).is_empty());
        assert!(color_segments(&[sample(0.0, 0.9)]).is_empty());
    }

    #[test]
    fn more_severe_endpoint_wins() {
        let segments = color_segments(&[sample(0.0, 0.1), sample(1.0, 0.9)]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].tier, RiskTier::High);

        let reversed = color_segments(&[sample(0.0, 0.9), sample(1.0, 0.1)]);
        assert_eq!(reversed[0].tier, RiskTier::High);
    }

    #[test]
    fn matching_tiers_are_kept() {
        let segments = color_segments(&[sample(0.0, 0.5), sample(1.0, 0.4)]);
        assert_eq!(segments[0].tier, RiskTier::Medium);
        assert_eq!(segments[0].color(), "orange");
    }

    #[test]
    fn segments_are_not_merged() {
        let samples = [
            sample(0.0, 0.1),
            sample(1.0, 0.1),
            sample(2.0, 0.1),
            sample(3.0, 0.7),
        ];
        let segments = color_segments(&samples);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].from, samples[0].point);
        assert_eq!(segments[0].to, samples[1].point);
        assert_eq!(segments[1].from, samples[1].point);
        let tiers: Vec<RiskTier> = segments.iter().map(|s| s.tier).collect();
        assert_eq!(tiers, vec![RiskTier::Low, RiskTier::Low, RiskTier::High]);
    }
}
