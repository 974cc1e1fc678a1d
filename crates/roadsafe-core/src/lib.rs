pub mod annotate;
pub mod density;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod providers;
pub mod risk;
pub mod sampling;
pub mod segments;
pub mod spatial;

pub use annotate::{annotate, predict_point, DEFAULT_ORACLE_CONCURRENCY};
pub use density::{density_hotspots, DensityHotspot, GridCell, DEFAULT_MIN_REPORTS};
pub use export::{reports_to_csv, ExportError};
pub use models::{
    AnimalStatus, AnimalType, ContextError, CreatePetitionRequest, CreateReportRequest, GeoPoint,
    HotspotMarker, Petition, PetitionError, PetitionType, PredictionContext, Report, RiskSample,
    Route, RouteSegment, WeatherSnapshot,
};
pub use pipeline::{assess_route, assess_trip, PipelineConfig, RouteRiskError, RouteRiskReport};
pub use providers::{
    DirectionsProvider, Geocoder, OracleError, ProviderError, RiskOracle, WeatherProvider,
};
pub use risk::{probability_to_radius, RiskTier};
pub use sampling::{sample_route, SamplingError, DEFAULT_SAMPLE_SPACING_M};
pub use segments::color_segments;
pub use spatial::{distance, haversine_distance};
