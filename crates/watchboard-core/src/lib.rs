//! watchboard-core — data model, normalization pipeline and view state.
//!
//! # Architecture
//!
//! ```text
//! Feeds ──► Normalizer / Forecast shaping ──► State update ──► UI
//!                                                 │
//!                                                 └──► Effects (back to Feeds)
//! ```
//!
//! Nothing in this crate performs I/O apart from [`config::Config::load`].
//! State transitions are pure functions so they can be tested without a
//! terminal or a network.

pub mod config;
pub mod error;
pub mod forecast;
pub mod normalizer;
pub mod state;
pub mod types;

pub use error::WatchError;
pub use types::{City, Coordinates, Forecast, HourlyPoint, NormalizedTransaction, PictureOfDay, TransactionRecord};
