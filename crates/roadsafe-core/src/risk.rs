//! Risk tiers and the thresholds that map predicted probabilities onto them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Probabilities strictly above this are high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 0.66;
/// Probabilities strictly above this (and not high) are medium risk.
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.33;

const MIN_ALERT_RADIUS_M: f64 = 1_000.0;
const MAX_ALERT_RADIUS_M: f64 = 7_000.0;

/// Discrete risk bucket derived from a hazard probability.
///
/// Variants are declared in severity order so the derived `Ord` gives
/// `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskTier {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Classify a probability into a tier.
    ///
    /// Both thresholds are exclusive lower bounds, so `0.33` is `Low` and
    /// `0.66` is `Medium`. Out-of-range input extrapolates the same
    /// thresholds; NaN falls through to `Low`.
    pub fn classify(probability: f64) -> Self {
        if probability > HIGH_RISK_THRESHOLD {
            RiskTier::High
        } else if probability > MEDIUM_RISK_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// Map display color.
    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Low => "blue",
            RiskTier::Medium => "orange",
            RiskTier::High => "red",
        }
    }

    /// Display weight; higher is more severe.
    pub fn weight(&self) -> u8 {
        match self {
            RiskTier::Low => 0,
            RiskTier::Medium => 1,
            RiskTier::High => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Radius in meters of the danger circle drawn for a hotspot prediction.
pub fn probability_to_radius(probability: f64) -> f64 {
    MIN_ALERT_RADIUS_M + probability * (MAX_ALERT_RADIUS_M - MIN_ALERT_RADIUS_M)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_resolve_to_lower_tier() {
        assert_eq!(RiskTier::classify(0.33), RiskTier::Low);
        assert_eq!(RiskTier::classify(0.34), RiskTier::Medium);
        assert_eq!(RiskTier::classify(0.66), RiskTier::Medium);
        assert_eq!(RiskTier::classify(0.67), RiskTier::High);
    }

    #[test]
    fn classify_is_monotonic() {
        let mut previous = RiskTier::classify(-0.5);
        for step in 0..=150 {
            let p = -0.25 + step as f64 * 0.01;
            let tier = RiskTier::classify(p);
            assert!(tier >= previous, "tier dropped at p={p}");
            previous = tier;
        }
    }

    #[test]
    fn out_of_range_input_does_not_panic() {
        assert_eq!(RiskTier::classify(-3.0), RiskTier::Low);
        assert_eq!(RiskTier::classify(12.0), RiskTier::High);
        assert_eq!(RiskTier::classify(f64::NAN), RiskTier::Low);
    }

    #[test]
    fn tier_order_matches_weight() {
        assert!(RiskTier::Low < RiskTier::Medium);
        assert!(RiskTier::Medium < RiskTier::High);
        assert!(RiskTier::Low.weight() < RiskTier::High.weight());
        assert_eq!(RiskTier::Medium.max(RiskTier::Low), RiskTier::Medium);
    }

    #[test]
    fn colors_and_names() {
        assert_eq!(RiskTier::Low.color(), "blue");
        assert_eq!(RiskTier::Medium.color(), "orange");
        assert_eq!(RiskTier::High.color(), "red");
        assert_eq!(RiskTier::High.to_string(), "High");
    }

    #[test]
    fn radius_grows_with_probability() {
        assert_eq!(probability_to_radius(0.0), 1_000.0);
        assert_eq!(probability_to_radius(1.0), 7_000.0);
        assert_eq!(probability_to_radius(0.5), 4_000.0);
    }
}
