//! In-memory state store using DashMap.

use anyhow::Result;
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use roadsafe_core::{
    AnimalStatus, AnimalType, DirectionsProvider, Geocoder, HotspotMarker, Petition, Report,
    RiskOracle, WeatherProvider,
};
use roadsafe_providers::{OrsClient, PredictionClient, WeatherClient};

use crate::cache::CachedGeocoder;
use crate::config::Config;

const MAX_HOTSPOT_MARKERS: usize = 256;

/// External collaborators the handlers call through.
#[derive(Clone)]
pub struct Services {
    pub geocoder: Arc<dyn Geocoder>,
    pub directions: Arc<dyn DirectionsProvider>,
    pub oracle: Arc<dyn RiskOracle>,
    pub weather: Option<Arc<dyn WeatherProvider>>,
}

impl Services {
    /// Build the HTTP-backed services described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let timeout = config.http_timeout();
        let ors = Arc::new(OrsClient::new(
            config.ors_base_url.clone(),
            config.ors_api_key.clone(),
            timeout,
        )?);
        let geocoder = Arc::new(CachedGeocoder::new(
            ors.clone(),
            config.geocode_cache_ttl(),
            config.geocode_cache_max_entries,
        ));
        let oracle = Arc::new(PredictionClient::new(config.prediction_url.clone(), timeout)?);

        let weather: Option<Arc<dyn WeatherProvider>> = if config.weather_enabled() {
            Some(Arc::new(WeatherClient::new(
                config.weather_base_url.clone(),
                config.weather_api_key.clone(),
                timeout,
            )?))
        } else {
            tracing::warn!("WEATHER_API_KEY not set; reports will be filed without weather");
            None
        };

        Ok(Self {
            geocoder,
            directions: ors,
            oracle,
            weather,
        })
    }
}

/// Application state - thread-safe store for reports, petitions and markers.
pub struct AppState {
    config: Config,
    services: Services,
    reports: DashMap<String, Report>,
    petitions: DashMap<String, Petition>,
    hotspots: Mutex<VecDeque<HotspotMarker>>,
}

impl AppState {
    pub fn new(config: Config, services: Services) -> Self {
        Self {
            config,
            services,
            reports: DashMap::new(),
            petitions: DashMap::new(),
            hotspots: Mutex::new(VecDeque::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn geocoder(&self) -> &dyn Geocoder {
        self.services.geocoder.as_ref()
    }

    pub fn directions(&self) -> &dyn DirectionsProvider {
        self.services.directions.as_ref()
    }

    pub fn oracle(&self) -> &dyn RiskOracle {
        self.services.oracle.as_ref()
    }

    pub fn weather(&self) -> Option<&dyn WeatherProvider> {
        self.services.weather.as_deref()
    }

    /// Store a new report.
    pub fn add_report(&self, report: Report) {
        self.reports.insert(report.id.clone(), report);
    }

    pub fn get_report(&self, id: &str) -> Option<Report> {
        self.reports.get(id).map(|r| r.value().clone())
    }

    /// Reports matching the filters, oldest first.
    pub fn get_reports(
        &self,
        status: Option<AnimalStatus>,
        animal: Option<AnimalType>,
    ) -> Vec<Report> {
        let mut reports: Vec<Report> = self
            .reports
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .filter(|r| animal.map_or(true, |a| r.animal == a))
            .map(|r| r.value().clone())
            .collect();
        reports.sort_by(|a, b| a.time.cmp(&b.time).then_with(|| a.id.cmp(&b.id)));
        reports
    }

    pub fn add_petition(&self, petition: Petition) {
        self.petitions.insert(petition.id.clone(), petition);
    }

    /// All petitions, newest first.
    pub fn get_petitions(&self) -> Vec<Petition> {
        let mut petitions: Vec<Petition> =
            self.petitions.iter().map(|p| p.value().clone()).collect();
        petitions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
        petitions
    }

    /// Remember a hotspot marker, dropping the oldest past the cap.
    pub fn record_hotspot(&self, marker: HotspotMarker) {
        if let Ok(mut hotspots) = self.hotspots.lock() {
            hotspots.push_back(marker);
            while hotspots.len() > MAX_HOTSPOT_MARKERS {
                hotspots.pop_front();
            }
        }
    }

    /// Retained hotspot markers in the order they were added.
    pub fn get_hotspots(&self) -> Vec<HotspotMarker> {
        self.hotspots
            .lock()
            .map(|hotspots| hotspots.iter().cloned().collect())
            .unwrap_or_default()
    }
}
