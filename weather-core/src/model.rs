use serde::{Deserialize, Serialize};

/// A place returned by the geocoding service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Country code, empty when the service did not report one.
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// `name,country` as shown in the disambiguation list.
    pub fn label(&self) -> String {
        format!("{},{}", self.name, self.country)
    }
}

/// One raw 3-hourly entry of the forecast feed.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp: String,
    pub date: String,
    pub description: String,
    pub max_temperature: f64,
}

impl ForecastSample {
    /// Builds a sample from the raw `YYYY-MM-DD HH:MM:SS` timestamp.
    pub fn new(
        timestamp: impl Into<String>,
        max_temperature: f64,
        description: impl Into<String>,
    ) -> Self {
        let timestamp = timestamp.into();
        let date = timestamp.split_whitespace().next().unwrap_or_default().to_string();

        Self { timestamp, date, description: description.into(), max_temperature }
    }
}

/// Summary of a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: String,
    pub description: String,
    pub max_temperature: f64,
}
