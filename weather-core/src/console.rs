use crate::error::WeatherError;

/// Where the resolver and aggregator talk to the user.
///
/// The CLI backs this with a terminal; tests use a scripted implementation.
pub trait Console {
    /// Print one line of output.
    fn say(&mut self, line: &str);

    /// Show `prompt` and read one line of input.
    ///
    /// Returns [`WeatherError::Interrupted`] when the user aborts the prompt.
    fn ask(&mut self, prompt: &str) -> Result<String, WeatherError>;
}
