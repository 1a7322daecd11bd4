//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration handling (service base URL, optional API key, timeout)
//! - The remote service abstraction and its OpenWeather-compatible client
//! - Resolving a free-text city query to a single location
//! - Reducing a 3-hourly forecast feed to one entry per day
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod console;
pub mod error;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod resolve;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use console::Console;
pub use error::{InvalidChoice, WeatherError};
pub use forecast::{aggregate, daily_forecast};
pub use model::{DailyForecast, ForecastSample, Location};
pub use provider::{WeatherService, openweather::OpenWeatherClient, service_from_config};
pub use resolve::{parse_choice, resolve};
