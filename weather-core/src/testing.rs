//! In-memory doubles shared by the unit tests.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::{
    console::Console,
    error::WeatherError,
    model::{ForecastSample, Location},
    provider::WeatherService,
};

/// Console fed from a fixed list of answers; records everything it prints.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub output: Vec<String>,
    pub prompts: usize,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self { answers: answers.iter().map(|a| a.to_string()).collect(), ..Default::default() }
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn ask(&mut self, _prompt: &str) -> Result<String, WeatherError> {
        self.prompts += 1;
        self.answers.pop_front().ok_or(WeatherError::Interrupted)
    }
}

/// Service returning canned data; `None` simulates an unreachable service.
#[derive(Debug, Default)]
pub struct FakeService {
    pub candidates: Option<Vec<Location>>,
    pub samples: Option<Vec<ForecastSample>>,
}

#[async_trait]
impl WeatherService for FakeService {
    async fn geocode(&self, _query: &str) -> Result<Vec<Location>, WeatherError> {
        self.candidates
            .clone()
            .ok_or_else(|| WeatherError::ServiceUnavailable("status 503".into()))
    }

    async fn forecast(&self, _lat: f64, _lon: f64) -> Result<Vec<ForecastSample>, WeatherError> {
        self.samples
            .clone()
            .ok_or_else(|| WeatherError::ServiceUnavailable("status 500".into()))
    }
}

pub fn location(name: &str, country: &str) -> Location {
    Location { name: name.into(), country: country.into(), latitude: 1.0, longitude: 2.0 }
}
