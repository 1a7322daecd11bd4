//! Turning a free-text city query into exactly one [`Location`].

use tracing::{debug, warn};

use crate::{
    console::Console,
    error::{InvalidChoice, WeatherError},
    model::Location,
    provider::WeatherService,
};

pub const SERVICE_DOWN_MESSAGE: &str = "Failed to connect to the weather service.";
pub const NOT_FOUND_MESSAGE: &str = "City not found. Try again.";
pub const AMBIGUOUS_MESSAGE: &str = "Multiple matches found, which city did you mean?";
pub const CHOICE_PROMPT: &str = ">";

/// Parse a 1-based answer to the disambiguation list into a 0-based index.
pub fn parse_choice(input: &str, count: usize) -> Result<usize, InvalidChoice> {
    let choice: i64 = input.trim().parse().map_err(|_| InvalidChoice::NotANumber)?;

    match usize::try_from(choice) {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(InvalidChoice::OutOfRange),
    }
}

/// Look up `query` and narrow the candidates down to one location.
///
/// Failures are reported on the console before returning. `NotFound` and
/// `ServiceUnavailable` end the current lookup; `Interrupted` should end the program.
pub async fn resolve(
    service: &dyn WeatherService,
    console: &mut dyn Console,
    query: &str,
) -> Result<Location, WeatherError> {
    let mut candidates = match service.geocode(query).await {
        Ok(candidates) => candidates,
        Err(WeatherError::ServiceUnavailable(reason)) => {
            warn!(query, %reason, "geocoding failed");
            console.say(SERVICE_DOWN_MESSAGE);
            return Err(WeatherError::ServiceUnavailable(reason));
        }
        Err(e) => return Err(e),
    };

    match candidates.len() {
        0 => {
            console.say(NOT_FOUND_MESSAGE);
            Err(WeatherError::NotFound)
        }
        1 => Ok(candidates.remove(0)),
        count => {
            let index = choose(console, &candidates)?;
            debug!(query, count, index, "candidate chosen");
            Ok(candidates.swap_remove(index))
        }
    }
}

/// Lists the candidates and keeps asking until a valid number is given.
fn choose(console: &mut dyn Console, candidates: &[Location]) -> Result<usize, WeatherError> {
    console.say(AMBIGUOUS_MESSAGE);
    for (i, candidate) in candidates.iter().enumerate() {
        console.say(&format!("{}. {}", i + 1, candidate.label()));
    }

    loop {
        let answer = console.ask(CHOICE_PROMPT)?;
        match parse_choice(&answer, candidates.len()) {
            Ok(index) => return Ok(index),
            Err(invalid) => console.say(&invalid.to_string()),
        }
    }
}
