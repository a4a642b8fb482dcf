// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::app::{AppState, Job, Tab};
use crate::theme::Theme;
use watchboard_core::state::{StocksEvent, WeatherEvent};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Toggle the help popup
    Help,
    // Change theme
    Theme(String),
    // Add (or reuse) a representative button and load it
    Rep(String),
    // Add (or reuse) a city button and load it
    City(String),
    // Re-fetch the current tab's selection
    Reload,
    // Jump to a tab
    Show(Tab),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "reload" | "r" => Ok(Command::Reload),
            "stocks" => Ok(Command::Show(Tab::Stocks)),
            "weather" => Ok(Command::Show(Tab::Weather)),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "rep" => {
                if rest.is_empty() {
                    Err("usage: rep <name>".to_string())
                } else {
                    Ok(Command::Rep(rest.to_string()))
                }
            }
            "city" => {
                if rest.is_empty() {
                    Err("usage: city <name>".to_string())
                } else {
                    Ok(Command::City(rest.to_string()))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state, returning
/// any fetches it started.
pub fn execute_command(s: &mut AppState, cmd: Command) -> Vec<Job> {
    match cmd {
        Command::Quit => {
            s.quit = true;
            Vec::new()
        }
        Command::Help => {
            s.show_help = !s.show_help;
            Vec::new()
        }
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
            Vec::new()
        }
        Command::Rep(name) => {
            s.tab = Tab::Stocks;
            s.dispatch_stocks(StocksEvent::AddCustom(name))
        }
        Command::City(name) => {
            s.tab = Tab::Weather;
            s.dispatch_weather(WeatherEvent::AddCustom(name))
        }
        Command::Reload => s.reload(),
        Command::Show(tab) => {
            s.tab = tab;
            Vec::new()
        }
    }
}
