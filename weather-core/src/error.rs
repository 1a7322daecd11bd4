use thiserror::Error;

/// Why a disambiguation answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidChoice {
    #[error("Please enter a valid number.")]
    NotANumber,

    #[error("Invalid choice. Try again.")]
    OutOfRange,
}

#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport failure, timeout, non-success status or unreadable body.
    #[error("weather service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("no matching location")]
    NotFound,

    #[error(transparent)]
    InvalidInput(#[from] InvalidChoice),

    /// The user asked to quit while we were waiting on them or the network.
    #[error("interrupted")]
    Interrupted,
}

impl WeatherError {
    pub fn is_interrupted(&self) -> bool {
        matches!(self, WeatherError::Interrupted)
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::ServiceUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::ServiceUnavailable(format!("malformed response body: {err}"))
    }
}
