//! Server configuration from environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use roadsafe_core::{PipelineConfig, DEFAULT_ORACLE_CONCURRENCY, DEFAULT_SAMPLE_SPACING_M};
use roadsafe_providers::{
    ors::DEFAULT_ORS_BASE_URL, prediction::DEFAULT_PREDICTION_URL,
    weather::DEFAULT_WEATHER_BASE_URL,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub ors_base_url: String,
    pub ors_api_key: String,
    pub prediction_url: String,
    pub weather_base_url: String,
    /// Weather lookups are skipped when empty
    pub weather_api_key: String,
    pub route_sample_spacing_m: f64,
    pub oracle_concurrency: usize,
    pub http_timeout_s: u64,
    pub geocode_cache_ttl_s: u64,
    pub geocode_cache_max_entries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            ors_base_url: DEFAULT_ORS_BASE_URL.to_string(),
            ors_api_key: String::new(),
            prediction_url: DEFAULT_PREDICTION_URL.to_string(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            weather_api_key: String::new(),
            route_sample_spacing_m: DEFAULT_SAMPLE_SPACING_M,
            oracle_concurrency: DEFAULT_ORACLE_CONCURRENCY,
            http_timeout_s: 10,
            geocode_cache_ttl_s: 3600,
            geocode_cache_max_entries: 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_env("ROADSAFE_PORT").unwrap_or(defaults.server_port),
            ors_base_url: env::var("ORS_BASE_URL").unwrap_or(defaults.ors_base_url),
            ors_api_key: env::var("ORS_API_KEY").unwrap_or(defaults.ors_api_key),
            prediction_url: env::var("PREDICTION_URL").unwrap_or(defaults.prediction_url),
            weather_base_url: env::var("WEATHER_BASE_URL").unwrap_or(defaults.weather_base_url),
            weather_api_key: env::var("WEATHER_API_KEY").unwrap_or(defaults.weather_api_key),
            route_sample_spacing_m: parse_env("ROUTE_SAMPLE_SPACING_M")
                .filter(|spacing: &f64| spacing.is_finite() && *spacing > 0.0)
                .unwrap_or(defaults.route_sample_spacing_m),
            oracle_concurrency: parse_env("ORACLE_CONCURRENCY")
                .filter(|limit: &usize| *limit > 0)
                .unwrap_or(defaults.oracle_concurrency),
            http_timeout_s: parse_env("HTTP_TIMEOUT_S").unwrap_or(defaults.http_timeout_s),
            geocode_cache_ttl_s: parse_env("GEOCODE_CACHE_TTL_S")
                .unwrap_or(defaults.geocode_cache_ttl_s),
            geocode_cache_max_entries: parse_env("GEOCODE_CACHE_MAX_ENTRIES")
                .unwrap_or(defaults.geocode_cache_max_entries),
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_s.max(1))
    }

    pub fn geocode_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.geocode_cache_ttl_s)
    }

    /// Pipeline settings, with an optional per-request spacing override.
    pub fn pipeline(&self, spacing_m: Option<f64>) -> PipelineConfig {
        PipelineConfig {
            spacing_m: spacing_m.unwrap_or(self.route_sample_spacing_m),
            concurrency: self.oracle_concurrency,
        }
    }

    pub fn weather_enabled(&self) -> bool {
        !self.weather_api_key.trim().is_empty()
    }
}

fn parse_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
