//! External weather provider integration.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::weather::classify::{ForecastDay, WeatherSnapshot};

/// Current conditions plus a daily forecast for one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: WeatherSnapshot,
    pub forecast: Vec<ForecastDay>,
}

/// Seam for the external weather API so the service can run against canned
/// data in tests.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch(&self, latitude: f64, longitude: f64) -> anyhow::Result<WeatherReport>;
}

/// HTTP provider against the configured weather API base.
pub struct HttpWeatherProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpWeatherProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

// Provider wire format. Visibility is optional in most feeds; default to
// clear (10 mi) when absent.
#[derive(Debug, Deserialize)]
struct WireObservation {
    temperature_f: f64,
    wind_speed_mph: f64,
    precipitation_in: f64,
    #[serde(default = "default_visibility")]
    visibility_mi: f64,
}

fn default_visibility() -> f64 {
    10.0
}

#[derive(Debug, Deserialize)]
struct WireDaily {
    date: NaiveDate,
    #[serde(flatten)]
    observation: WireObservation,
}

#[derive(Debug, Deserialize)]
struct WireForecast {
    current: WireObservation,
    #[serde(default)]
    daily: Vec<WireDaily>,
}

impl From<WireObservation> for WeatherSnapshot {
    fn from(o: WireObservation) -> Self {
        WeatherSnapshot {
            temperature: o.temperature_f,
            wind_speed: o.wind_speed_mph,
            precipitation: o.precipitation_in,
            visibility: o.visibility_mi,
        }
    }
}

#[async_trait]
impl WeatherProvider for HttpWeatherProvider {
    async fn fetch(&self, latitude: f64, longitude: f64) -> anyhow::Result<WeatherReport> {
        let url = format!("{}/v1/forecast", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .query(&[("latitude", latitude), ("longitude", longitude)])
            .query(&[("units", "imperial"), ("days", "10")]);
        if !self.api_key.is_empty() {
            request = request.query(&[("apikey", self.api_key.as_str())]);
        }

        let resp = request.send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("weather provider returned {status}: {text}");
        }

        let wire: WireForecast = resp.json().await?;
        Ok(WeatherReport {
            current: wire.current.into(),
            forecast: wire
                .daily
                .into_iter()
                .map(|d| ForecastDay {
                    date: d.date,
                    weather: d.observation.into(),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_forecast_parses_with_missing_visibility() {
        let json = r#"{
            "current": {"temperature_f": 68.0, "wind_speed_mph": 9.0, "precipitation_in": 0.0},
            "daily": [
                {"date": "2025-06-01", "temperature_f": 70.0, "wind_speed_mph": 12.0,
                 "precipitation_in": 0.02, "visibility_mi": 8.5}
            ]
        }"#;
        let wire: WireForecast = serde_json::from_str(json).unwrap();
        assert_eq!(wire.current.visibility_mi, 10.0);
        assert_eq!(wire.daily.len(), 1);
        assert_eq!(wire.daily[0].observation.visibility_mi, 8.5);
    }
}
