//! OpenWeatherMap current-conditions client.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use roadsafe_core::{GeoPoint, ProviderError, WeatherProvider, WeatherSnapshot};

use crate::{build_http_client, trim_base_url};

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org";

pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: trim_base_url(base_url),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn current(&self, point: GeoPoint) -> Result<WeatherSnapshot, ProviderError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", point.latitude.to_string()),
                ("lon", point.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "imperial".to_string()),
            ])
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| ProviderError::Malformed(err.to_string()))?;
        Ok(parse_weather_response(&payload))
    }
}

/// Pick temperature and the primary condition out of a weather response.
/// Missing fields are left empty.
pub fn parse_weather_response(payload: &Value) -> WeatherSnapshot {
    let primary = payload
        .get("weather")
        .and_then(Value::as_array)
        .and_then(|conditions| conditions.first());

    WeatherSnapshot {
        temp: payload
            .get("main")
            .and_then(|main| main.get("temp"))
            .and_then(Value::as_f64),
        condition: primary
            .and_then(|c| c.get("main"))
            .and_then(Value::as_str)
            .map(str::to_string),
        description: primary
            .and_then(|c| c.get("description"))
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_temperature_and_condition() {
        let payload = json!({
            "main": {"temp": 41.3, "humidity": 80},
            "weather": [
                {"main": "Fog", "description": "fog"},
                {"main": "Rain", "description": "light rain"}
            ]
        });
        let snapshot = parse_weather_response(&payload);
        assert_eq!(snapshot.temp, Some(41.3));
        assert_eq!(snapshot.condition.as_deref(), Some("Fog"));
        assert_eq!(snapshot.description.as_deref(), Some("fog"));
    }

    #[test]
    fn missing_fields_stay_empty() {
        let snapshot = parse_weather_response(&json!({"cod": 401}));
        assert_eq!(snapshot, WeatherSnapshot::default());
    }
}
