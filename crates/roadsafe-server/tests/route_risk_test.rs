//! Route risk API integration tests.
//!
//! Run with: cargo test --test route_risk_test -- --ignored
//!
//! Note: Requires a running RoadSafe server at http://localhost:3000 backed
//! by reachable routing and prediction services, or set ROADSAFE_TEST_URL.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("ROADSAFE_TEST_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

#[tokio::test]
#[ignore] // Run only when server is running
async fn test_health() {
    let resp = Client::new()
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to reach server");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore] // Run only when server is running
async fn test_route_risk_between_coordinates() {
    let client = Client::new();
    let body = json!({
        "origin": {"lat": 42.3601, "lon": -71.0589},
        "destination": {"lat": 42.4430, "lon": -71.2290},
        "spacing_m": 1000.0
    });
    let resp = client
        .post(format!("{}/v1/routes/risk", base_url()))
        .json(&body)
        .send()
        .await
        .expect("Failed to request route risk");
    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    let sampled = json["sampled_points"].as_array().unwrap();
    let samples = json["samples"].as_array().unwrap();
    let segments = json["segments"].as_array().unwrap();
    assert!(!sampled.is_empty());
    assert_eq!(samples.len(), sampled.len());
    assert_eq!(segments.len(), sampled.len().saturating_sub(1));

    for sample in samples {
        let p = sample["probability"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&p));
    }
}

#[tokio::test]
#[ignore] // Run only when server is running
async fn test_invalid_spacing_rejected() {
    let client = Client::new();
    let body = json!({
        "origin": {"lat": 42.3601, "lon": -71.0589},
        "destination": {"lat": 42.4430, "lon": -71.2290},
        "spacing_m": -5.0
    });
    let resp = client
        .post(format!("{}/v1/routes/risk", base_url()))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore] // Run only when server is running
async fn test_report_and_petition_roundtrip() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .post(format!("{}/v1/reports", base))
        .json(&json!({"animal": "deer", "status": "alive", "location": {"lat": 42.36, "lon": -71.06}}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let report: Value = resp.json().await.unwrap();
    let id = report["id"].as_str().unwrap();

    let reports: Value = client
        .get(format!("{}/v1/reports?status=alive", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(reports
        .as_array()
        .unwrap()
        .iter()
        .any(|r| r["id"].as_str() == Some(id)));

    let resp = client
        .post(format!("{}/v1/petitions", base))
        .json(&json!({"types": ["signs"], "area": "Route 2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
}
