use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use watchboard::headless;
use watchboard_core::config::Config;
use watchboard_feeds::Feeds;

#[derive(Parser)]
#[command(
    name = "watchboard",
    about = "House stock disclosures, hourly forecasts and the astronomy picture of the day"
)]
struct Cli {
    /// Write debug logs to /tmp/watchboard-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Read settings from this file instead of ~/.config/watchboard/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Print a representative's transactions, largest first, and exit.
    Stocks {
        /// Representative name (case-insensitive). Defaults to the startup representative.
        #[arg(long)]
        rep: Option<String>,
        /// Maximum number of rows to print.
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Override the transactions feed URL.
        #[arg(long)]
        url: Option<String>,
    },
    /// Print the hourly forecast for a city and exit.
    Weather {
        /// City name. Built-in cities skip geocoding. Defaults to the startup city.
        #[arg(long)]
        city: Option<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/watchboard-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("watchboard debug log started, tail -f /tmp/watchboard-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to built-in config");
            Config::defaults()
        }),
    };

    let Some(mode) = cli.mode else {
        watchboard_tui::run(config)?;
        return Ok(ExitCode::SUCCESS);
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let report = runtime.block_on(run_headless(mode, config));
    match report {
        Ok(text) => {
            print!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run_headless(mode: Mode, mut config: Config) -> watchboard_core::error::Result<String> {
    match mode {
        Mode::Stocks { rep, limit, url } => {
            if let Some(url) = url {
                config.endpoints.transactions = url;
            }
            let feeds = Feeds::from_config(&config.endpoints)?;
            let rep = rep.unwrap_or(config.stocks.startup_representative);
            headless::stocks_report(&feeds.stocks, &rep, limit).await
        }
        Mode::Weather { city } => {
            let feeds = Feeds::from_config(&config.endpoints)?;
            let city = city.unwrap_or(config.weather.startup_city);
            headless::weather_report(&feeds.weather, &feeds.weather, &city, config.weather.forecast_hours)
                .await
        }
    }
}
