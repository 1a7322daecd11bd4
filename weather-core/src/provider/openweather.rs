use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    Config,
    error::WeatherError,
    model::{ForecastSample, Location},
};

use super::{GEOCODE_LIMIT, WeatherService};

/// Client for OpenWeather's geocoding and 5-day forecast endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    base_url: String,
    api_key: Option<String>,
    http: Client,
}

impl OpenWeatherClient {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            api_key: config.api_key().map(str::to_owned),
            http,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}{}", self.base_url, path);

        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        if let Some(key) = self.api_key.as_deref() {
            query.push(("appid", key));
        }

        debug!(%url, "sending request");

        let res = self.http.get(&url).query(&query).send().await.map_err(|e| {
            warn!(%url, error = %e, "request failed");
            WeatherError::from(e)
        })?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%url, %status, "service returned error status");
            return Err(WeatherError::ServiceUnavailable(format!(
                "{} failed with status {}: {}",
                path,
                status,
                truncate_body(&body),
            )));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct OwGeoCandidate {
    name: Option<String>,
    country: Option<String>,
    lat: f64,
    lon: f64,
}

impl From<OwGeoCandidate> for Location {
    fn from(c: OwGeoCandidate) -> Self {
        Location {
            name: c.name.unwrap_or_else(|| "Unknown".to_string()),
            country: c.country.unwrap_or_default(),
            latitude: c.lat,
            longitude: c.lon,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    #[serde(default)]
    list: Vec<OwForecastEntry>,
}

impl From<OwForecastEntry> for ForecastSample {
    fn from(entry: OwForecastEntry) -> Self {
        let description = entry
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .unwrap_or_else(|| "Unknown".to_string());

        ForecastSample::new(entry.dt_txt, entry.main.temp_max, description)
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn geocode(&self, query: &str) -> Result<Vec<Location>, WeatherError> {
        let candidates: Vec<OwGeoCandidate> = self
            .get_json(
                "/geo/1.0/direct",
                &[("q", query.to_string()), ("limit", GEOCODE_LIMIT.to_string())],
            )
            .await?;

        debug!(query, count = candidates.len(), "geocoding candidates");
        Ok(candidates.into_iter().map(Location::from).collect())
    }

    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastSample>, WeatherError> {
        let parsed: OwForecastResponse = self
            .get_json(
                "/data/2.5/forecast",
                &[
                    ("lat", latitude.to_string()),
                    ("lon", longitude.to_string()),
                    ("units", "metric".to_string()),
                ],
            )
            .await?;

        debug!(latitude, longitude, samples = parsed.list.len(), "forecast samples");
        Ok(parsed.list.into_iter().map(ForecastSample::from).collect())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
