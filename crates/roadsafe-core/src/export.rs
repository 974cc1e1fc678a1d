//! Report export as CSV.

use serde::Serialize;
use thiserror::Error;

use crate::models::{AnimalStatus, AnimalType, Report};

const CSV_HEADER: [&str; 13] = [
    "id",
    "animal",
    "status",
    "lat",
    "lon",
    "time",
    "hour",
    "day_of_week",
    "month",
    "temp",
    "condition",
    "description",
    "collection",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv output is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Flat row; nested location and weather become their own columns.
#[derive(Serialize)]
struct ReportRow<'a> {
    id: &'a str,
    animal: AnimalType,
    status: AnimalStatus,
    lat: f64,
    lon: f64,
    time: String,
    hour: u32,
    day_of_week: u32,
    month: u32,
    temp: Option<f64>,
    condition: Option<&'a str>,
    description: Option<&'a str>,
    collection: &'a str,
}

impl<'a> From<&'a Report> for ReportRow<'a> {
    fn from(report: &'a Report) -> Self {
        let weather = report.weather.as_ref();
        Self {
            id: &report.id,
            animal: report.animal,
            status: report.status,
            lat: report.location.latitude,
            lon: report.location.longitude,
            time: report.time.to_rfc3339(),
            hour: report.hour,
            day_of_week: report.day_of_week,
            month: report.month,
            temp: weather.and_then(|w| w.temp),
            condition: weather.and_then(|w| w.condition.as_deref()),
            description: weather.and_then(|w| w.description.as_deref()),
            collection: &report.collection,
        }
    }
}

/// Render reports as CSV with a header row, even when there are none.
pub fn reports_to_csv(reports: &[Report]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for report in reports {
        writer.serialize(ReportRow::from(report))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
