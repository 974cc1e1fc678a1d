//! Wildlife sighting reports.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use roadsafe_core::{
    density_hotspots, reports_to_csv, AnimalStatus, AnimalType, CreateReportRequest,
    DensityHotspot, Report, DEFAULT_MIN_REPORTS,
};

use crate::api::error::ApiError;
use crate::api::extract::{ApiJson, ApiQuery};
use crate::state::AppState;

/// File a new report, attaching current weather when available.
pub async fn create_report(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateReportRequest>,
) -> (StatusCode, Json<Report>) {
    let weather = match state.weather() {
        Some(provider) => match provider.current(req.location).await {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                tracing::warn!("Weather lookup failed, filing report without it: {}", err);
                None
            }
        },
        None => None,
    };

    let report = Report::observed_at(Uuid::new_v4().to_string(), req, &Local::now(), weather);
    state.add_report(report.clone());
    tracing::info!(
        "Report {} ({:?}) saved to \"{}\"",
        report.id,
        report.animal,
        report.collection
    );

    (StatusCode::CREATED, Json(report))
}

#[derive(Debug, Deserialize)]
pub struct ListReportsQuery {
    pub status: Option<AnimalStatus>,
    pub animal: Option<AnimalType>,
}

/// List reports, oldest first.
pub async fn list_reports(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ListReportsQuery>,
) -> Json<Vec<Report>> {
    Json(state.get_reports(query.status, query.animal))
}

pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Report>, ApiError> {
    state
        .get_report(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("report not found".to_string()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
    pub status: Option<AnimalStatus>,
    pub animal: Option<AnimalType>,
}

/// Download reports as JSON or CSV, oldest first.
pub async fn export_reports(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ExportQuery>,
) -> Result<Response, ApiError> {
    let reports = state.get_reports(query.status, query.animal);
    tracing::info!("Exporting {} reports as {:?}", reports.len(), query.format);

    match query.format {
        ExportFormat::Json => Ok(Json(reports).into_response()),
        ExportFormat::Csv => {
            let csv = reports_to_csv(&reports)?;
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"reports.csv\"",
                    ),
                ],
                csv,
            )
                .into_response())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DensityQuery {
    pub min_count: Option<usize>,
    pub status: Option<AnimalStatus>,
    pub animal: Option<AnimalType>,
}

/// Grid cells where reports cluster, densest first.
pub async fn report_hotspots(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<DensityQuery>,
) -> Json<Vec<DensityHotspot>> {
    let reports = state.get_reports(query.status, query.animal);
    let min_count = query.min_count.unwrap_or(DEFAULT_MIN_REPORTS);
    Json(density_hotspots(
        reports.iter().map(|report| &report.location),
        min_count,
    ))
}
