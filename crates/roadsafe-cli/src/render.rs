//! Plain-text rendering of server responses.

use roadsafe_core::{HotspotMarker, RiskTier, RouteRiskReport, RouteSegment};

/// One line per tier with the number of segments and their length.
pub fn summarize_route(report: &RouteRiskReport) -> String {
    let mut lines = vec![format!(
        "Route: {:.1} km, {} points sampled from {}",
        report.distance_m / 1000.0,
        report.sampled_points.len(),
        report.route_points
    )];

    for tier in [RiskTier::High, RiskTier::Medium, RiskTier::Low] {
        let segments: Vec<&RouteSegment> =
            report.segments.iter().filter(|s| s.tier == tier).collect();
        if segments.is_empty() {
            continue;
        }
        let length_m: f64 = segments
            .iter()
            .map(|s| roadsafe_core::distance(&s.from, &s.to))
            .sum();
        lines.push(format!(
            "  {:<6} ({:<6}) {:>3} segments, {:.1} km",
            tier.as_str(),
            tier.color(),
            segments.len(),
            length_m / 1000.0
        ));
    }

    match report.highest_tier {
        Some(tier) => lines.push(format!("Highest risk: {}", tier)),
        None => lines.push("Highest risk: none (empty route)".to_string()),
    }
    lines.join("\n")
}

/// One line per colored segment, in route order.
pub fn list_segments(segments: &[RouteSegment]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{:>3}. ({:.5}, {:.5}) -> ({:.5}, {:.5})  {} [{}]",
                i + 1,
                s.from.latitude,
                s.from.longitude,
                s.to.latitude,
                s.to.longitude,
                s.tier,
                s.color()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn summarize_hotspot(marker: &HotspotMarker) -> String {
    format!(
        "{} ({:.5}, {:.5}): {:.0}% {} risk, {:.0} m radius",
        marker.place_name,
        marker.point.latitude,
        marker.point.longitude,
        marker.probability * 100.0,
        marker.tier,
        marker.radius_m
    )
}
