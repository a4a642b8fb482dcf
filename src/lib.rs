//! watchboard — terminal dashboard for House stock disclosures, hourly
//! forecasts and the astronomy picture of the day.
//!
//! The binary runs the TUI from `watchboard-tui` by default. This crate adds
//! the headless subcommands, which print one report to stdout and exit.
//!
//! # Architecture
//!
//! ```text
//! feeds (reqwest) ──► core (normalize / take_hours) ──► state ──► TUI
//!                                       │
//!                                       └──► headless report
//! ```

pub mod headless;
