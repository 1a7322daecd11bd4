use std::collections::VecDeque;

use weather_core::{Config, Console, OpenWeatherClient, WeatherError};

/// Console that answers from a script and records what was printed.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub output: Vec<String>,
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
        self.answers.pop_front().ok_or(WeatherError::Interrupted)
    }
}

pub fn client_for(base_url: &str, api_key: Option<&str>) -> OpenWeatherClient {
    let cfg = Config {
        base_url: Some(base_url.to_string()),
        api_key: api_key.map(str::to_owned),
        timeout_secs: Some(2),
    };
    OpenWeatherClient::from_config(&cfg).unwrap()
}

pub fn forecast_entry(dt_txt: &str, temp_max: f64, description: &str) -> serde_json::Value {
    serde_json::json!({
        "dt_txt": dt_txt,
        "main": { "temp": temp_max - 1.0, "temp_max": temp_max },
        "weather": [{ "id": 800, "main": "X", "description": description }]
    })
}
