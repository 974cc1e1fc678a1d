//! Core data models for hazard reports, petitions and route risk.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::risk::{probability_to_radius, RiskTier};

/// A geographic coordinate in decimal degrees.
///
/// Range is not validated; out-of-range values are a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Ordered path from origin to destination.
pub type Route = Vec<GeoPoint>;

/// Point in time fed to the hazard model alongside the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionContext {
    /// Hour of day, 0-23
    pub hour: u32,
    /// Month of year, 1-12
    pub month: u32,
    /// Day of week, 0-6 with Sunday = 0
    pub weekday: u32,
}

impl PredictionContext {
    pub fn new(hour: u32, month: u32, weekday: u32) -> Self {
        Self {
            hour,
            month,
            weekday,
        }
    }

    /// Context for the current local time.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self {
            hour: at.hour(),
            month: at.month(),
            weekday: at.weekday().num_days_from_sunday(),
        }
    }

    /// Check every field is inside the range the hazard model was trained on.
    pub fn validate(&self) -> Result<(), ContextError> {
        if self.hour > 23 {
            return Err(ContextError::Hour(self.hour));
        }
        if !(1..=12).contains(&self.month) {
            return Err(ContextError::Month(self.month));
        }
        if self.weekday > 6 {
            return Err(ContextError::Weekday(self.weekday));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("hour must be 0-23, got {0}")]
    Hour(u32),
    #[error("month must be 1-12, got {0}")]
    Month(u32),
    #[error("weekday must be 0-6 with Sunday = 0, got {0}")]
    Weekday(u32),
}

/// A sampled route point paired with its predicted risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSample {
    pub point: GeoPoint,
    pub probability: f64,
    pub tier: RiskTier,
}

impl RiskSample {
    pub fn from_probability(point: GeoPoint, probability: f64) -> Self {
        Self {
            point,
            probability,
            tier: RiskTier::classify(probability),
        }
    }
}

/// Line between two adjacent sampled points, colored by its worst endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub tier: RiskTier,
}

impl RouteSegment {
    pub fn color(&self) -> &'static str {
        self.tier.color()
    }
}

/// Single-location prediction rendered as a danger circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotMarker {
    pub place_name: String,
    pub point: GeoPoint,
    pub probability: f64,
    pub tier: RiskTier,
    pub color: String,
    pub radius_m: f64,
    pub created_at: DateTime<Utc>,
}

impl HotspotMarker {
    pub fn new(place_name: impl Into<String>, point: GeoPoint, probability: f64) -> Self {
        let tier = RiskTier::classify(probability);
        Self {
            place_name: place_name.into(),
            point,
            probability,
            tier,
            color: tier.color().to_string(),
            radius_m: probability_to_radius(probability),
            created_at: Utc::now(),
        }
    }
}

/// Current conditions captured alongside a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in degrees Fahrenheit
    pub temp: Option<f64>,
    pub condition: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimalType {
    Deer,
    Bird,
    /// Raccoon, groundhog and similar
    BigRodent,
    SmallRodent,
    DogOrCat,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalStatus {
    #[default]
    Alive,
    Dead,
}

impl AnimalStatus {
    /// Collection a report with this status is filed under.
    pub fn collection(&self) -> &'static str {
        match self {
            AnimalStatus::Alive => "aliveReports",
            AnimalStatus::Dead => "deadReports",
        }
    }
}

/// Request to file a wildlife sighting.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReportRequest {
    pub animal: AnimalType,
    #[serde(default)]
    pub status: AnimalStatus,
    pub location: GeoPoint,
}

/// A stored wildlife sighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub animal: AnimalType,
    pub status: AnimalStatus,
    pub location: GeoPoint,
    pub time: DateTime<Utc>,
    pub hour: u32,
    /// ISO weekday, Monday = 1 through Sunday = 7
    pub day_of_week: u32,
    pub month: u32,
    pub weather: Option<WeatherSnapshot>,
    pub collection: String,
}

impl Report {
    /// Build a report observed at `at`, deriving the time features from its local clock.
    pub fn observed_at<Tz: TimeZone>(
        id: impl Into<String>,
        request: CreateReportRequest,
        at: &DateTime<Tz>,
        weather: Option<WeatherSnapshot>,
    ) -> Self {
        Self {
            id: id.into(),
            animal: request.animal,
            status: request.status,
            location: request.location,
            time: at.with_timezone(&Utc),
            hour: at.hour(),
            day_of_week: at.weekday().number_from_monday(),
            month: at.month(),
            weather,
            collection: request.status.collection().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetitionType {
    /// Wildlife warning signs
    Signs,
    Fencing,
    /// Wildlife overpasses
    Overpasses,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePetitionRequest {
    #[serde(default)]
    pub types: Vec<PetitionType>,
    #[serde(default)]
    pub area: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PetitionError {
    #[error("select at least one petition type")]
    NoTypes,
    #[error("please enter an area")]
    MissingArea,
}

impl CreatePetitionRequest {
    pub fn validate(&self) -> Result<(), PetitionError> {
        if self.types.is_empty() {
            return Err(PetitionError::NoTypes);
        }
        if self.area.trim().is_empty() {
            return Err(PetitionError::MissingArea);
        }
        Ok(())
    }
}

/// A community request for safety infrastructure in an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Petition {
    pub id: String,
    pub types: Vec<PetitionType>,
    pub area: String,
    pub timestamp: DateTime<Utc>,
}

impl Petition {
    /// Validate and build a petition. Duplicate types are collapsed.
    pub fn from_request(
        id: impl Into<String>,
        request: CreatePetitionRequest,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, PetitionError> {
        request.validate()?;
        let mut types = Vec::with_capacity(request.types.len());
        for kind in request.types {
            if !types.contains(&kind) {
                types.push(kind);
            }
        }
        Ok(Self {
            id: id.into(),
            types,
            area: request.area.trim().to_string(),
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn geopoint_serializes_as_lat_lon() {
        let value = serde_json::to_value(GeoPoint::new(39.5, -98.35)).unwrap();
        assert_eq!(value, serde_json::json!({"lat": 39.5, "lon": -98.35}));
    }

    #[test]
    fn prediction_context_uses_sunday_zero() {
        // 2024-06-09 was a Sunday
        let at = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 9, 21, 15, 0)
            .unwrap();
        let context = PredictionContext::from_datetime(&at);
        assert_eq!(context, PredictionContext::new(21, 6, 0));
    }

    #[test]
    fn prediction_context_ranges() {
        assert_eq!(PredictionContext::new(0, 1, 0).validate(), Ok(()));
        assert_eq!(PredictionContext::new(23, 12, 6).validate(), Ok(()));
        assert_eq!(
            PredictionContext::new(24, 6, 3).validate(),
            Err(ContextError::Hour(24))
        );
        assert_eq!(
            PredictionContext::new(12, 0, 3).validate(),
            Err(ContextError::Month(0))
        );
        assert_eq!(
            PredictionContext::new(12, 13, 3).validate(),
            Err(ContextError::Month(13))
        );
        assert_eq!(
            PredictionContext::new(12, 6, 7).validate(),
            Err(ContextError::Weekday(7))
        );
        assert!(PredictionContext::now().validate().is_ok());
    }

    #[test]
    fn report_uses_iso_weekday_and_status_collection() {
        let at = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 9, 21, 15, 0)
            .unwrap();
        let request = CreateReportRequest {
            animal: AnimalType::Deer,
            status: AnimalStatus::Dead,
            location: GeoPoint::new(40.0, -75.0),
        };
        let report = Report::observed_at("r1", request, &at, None);
        assert_eq!(report.day_of_week, 7);
        assert_eq!(report.hour, 21);
        assert_eq!(report.month, 6);
        assert_eq!(report.collection, "deadReports");
        // Stored instant is UTC
        assert_eq!(report.time.to_rfc3339(), "2024-06-10T02:15:00+00:00");
    }

    #[test]
    fn animal_type_wire_names() {
        let parsed: AnimalType = serde_json::from_str("\"bigRodent\"").unwrap();
        assert_eq!(parsed, AnimalType::BigRodent);
        assert_eq!(
            serde_json::to_string(&AnimalType::DogOrCat).unwrap(),
            "\"dogOrCat\""
        );
    }

    #[test]
    fn petition_validation() {
        let empty = CreatePetitionRequest {
            types: vec![],
            area: "Chester County".into(),
        };
        assert_eq!(empty.validate(), Err(PetitionError::NoTypes));

        let no_area = CreatePetitionRequest {
            types: vec![PetitionType::Signs],
            area: "   ".into(),
        };
        assert_eq!(no_area.validate(), Err(PetitionError::MissingArea));

        let ok = CreatePetitionRequest {
            types: vec![PetitionType::Signs, PetitionType::Fencing, PetitionType::Signs],
            area: " Chester County ".into(),
        };
        let petition = Petition::from_request("p1", ok, Utc::now()).unwrap();
        assert_eq!(petition.types, vec![PetitionType::Signs, PetitionType::Fencing]);
        assert_eq!(petition.area, "Chester County");
    }

    #[test]
    fn hotspot_marker_derives_display_fields() {
        let marker = HotspotMarker::new("Clicked Location", GeoPoint::new(1.0, 2.0), 0.8);
        assert_eq!(marker.tier, RiskTier::High);
        assert_eq!(marker.color, "red");
        assert!((marker.radius_m - 5_800.0).abs() < 1e-9);
    }
}
