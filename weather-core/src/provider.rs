use crate::{
    Config,
    error::WeatherError,
    model::{ForecastSample, Location},
    provider::openweather::OpenWeatherClient,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Maximum number of geocoding candidates requested per query.
pub const GEOCODE_LIMIT: usize = 5;

/// The two remote calls the lookup depends on.
#[async_trait]
pub trait WeatherService: Send + Sync + Debug {
    /// Candidate places for a free-text query, in service order.
    async fn geocode(&self, query: &str) -> Result<Vec<Location>, WeatherError>;

    /// Raw 3-hourly samples for the coordinates, in metric units.
    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastSample>, WeatherError>;
}

/// Construct the HTTP-backed service from config.
pub fn service_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherService>> {
    let client = OpenWeatherClient::from_config(config)?;
    Ok(Box::new(client))
}
