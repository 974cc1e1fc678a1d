//! RoadSafe CLI - Command line tools for the RoadSafe server.
//!
//! Binaries:
//! - route_risk: score a driving route for wildlife hazard
//! - hotspot: predict the hazard at a single place
//! - export_reports: download filed reports as JSON and CSV

pub mod client;
pub mod render;

pub use client::{RoadSafeClient, RouteRiskResponse};
