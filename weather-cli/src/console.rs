use std::io::{self, BufRead, IsTerminal, Write};

use inquire::{InquireError, Text};
use tracing::warn;
use weather_core::{Console, WeatherError};

/// Talks to the user through `inquire` on a terminal, plain stdin otherwise.
#[derive(Debug)]
pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self { interactive: io::stdin().is_terminal() }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, WeatherError> {
        print!("{}", plain_prompt(prompt));
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // End of input ends the session like Ctrl-C does.
            Ok(0) => Err(WeatherError::Interrupted),
            Ok(_) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!(error = %e, "failed to read from stdin");
                Err(WeatherError::Interrupted)
            }
        }
    }
}

/// Questions get their own line and the answer goes after `> `.
fn plain_prompt(prompt: &str) -> String {
    if prompt == ">" { "> ".to_string() } else { format!("{prompt}\n> ") }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) {
        println!("{line}");
    }

    fn ask(&mut self, prompt: &str) -> Result<String, WeatherError> {
        if !self.interactive {
            return self.read_line(prompt);
        }

        match Text::new(prompt).prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationInterrupted) => Err(WeatherError::Interrupted),
            // Esc submits nothing; the caller decides what an empty answer means.
            Err(InquireError::OperationCanceled) => Ok(String::new()),
            Err(e) => {
                warn!(error = %e, "interactive prompt unavailable, reading stdin");
                self.interactive = false;
                self.read_line(prompt)
            }
        }
    }
}
