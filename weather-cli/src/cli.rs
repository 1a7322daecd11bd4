use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Text};
use tracing::{debug, warn};
use weather_core::{
    Config, Console, DailyForecast, WeatherError, WeatherService, config::DEFAULT_TIMEOUT_SECS,
    daily_forecast, resolve, service_from_config,
};

use crate::console::TerminalConsole;

const CITY_PROMPT: &str = "City?";
const FAREWELL: &str = "\nGoodbye!";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Five-day weather forecast for a city")]
pub struct Cli {
    /// Base URL of the OpenWeather-compatible service (overrides the config file).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// API key sent as `appid` (overrides the config file).
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Without a subcommand the tool keeps asking for cities until Ctrl-C.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively store service URL, API key and timeout in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?.with_overrides(self.base_url, self.api_key);

        match self.command {
            Some(Command::Configure) => configure(config),
            None => lookup_loop(&config).await,
        }
    }
}

/// Ask for cities forever; only an interrupt ends the loop.
async fn lookup_loop(config: &Config) -> anyhow::Result<()> {
    let service = service_from_config(config)?;
    let mut console = TerminalConsole::new();

    // Prompts surface Ctrl-C themselves; this covers network waits and plain stdin reads.
    tokio::spawn(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                println!("{FAREWELL}");
                std::process::exit(0);
            }
            Err(e) => warn!(error = %e, "unable to listen for Ctrl-C"),
        }
    });

    loop {
        if let Err(WeatherError::Interrupted) = lookup_once(service.as_ref(), &mut console).await {
            println!("{FAREWELL}");
            return Ok(());
        }
    }
}

/// One query cycle. Lookup failures are already reported to the user and end the cycle quietly.
async fn lookup_once(
    service: &dyn WeatherService,
    console: &mut dyn Console,
) -> Result<(), WeatherError> {
    let query = console.ask(CITY_PROMPT)?;

    let location = match resolve(service, console, &query).await {
        Ok(location) => location,
        Err(WeatherError::Interrupted) => return Err(WeatherError::Interrupted),
        Err(e) => {
            debug!(query, error = %e, "lookup ended without a location");
            return Ok(());
        }
    };

    console.say(&format!("Here's the weather in {}", location.name));

    for day in daily_forecast(service, console, location.latitude, location.longitude).await {
        console.say(&format_day(&day));
    }

    Ok(())
}

pub fn format_day(day: &DailyForecast) -> String {
    format!("{}: {} {:.1}°C", day.date, day.description, day.max_temperature)
}

fn configure(current: Config) -> anyhow::Result<()> {
    match prompt_config(&current) {
        Ok(cfg) => {
            let path = cfg.save()?;
            println!("Saved configuration to {}", path.display());
            Ok(())
        }
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            println!("Configuration unchanged.");
            Ok(())
        }
        Err(e) => Err(e).context("Failed to read configuration input"),
    }
}

fn prompt_config(current: &Config) -> Result<Config, InquireError> {
    let base_url = Text::new("Service base URL:").with_default(current.base_url()).prompt()?;

    let api_key = Text::new("API key (leave empty if the service needs none):")
        .with_initial_value(current.api_key().unwrap_or_default())
        .prompt()?;

    let timeout_secs = CustomType::<u64>::new("Request timeout in seconds:")
        .with_default(current.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
        .with_error_message("Please enter a whole number of seconds.")
        .prompt()?;

    Ok(Config {
        base_url: Some(base_url.trim().to_string()),
        api_key: Some(api_key.trim().to_string()).filter(|k| !k.is_empty()),
        timeout_secs: Some(timeout_secs),
    })
}
