//! Core library for the `weather-dash` weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The typed weather observation and the OpenWeather client
//! - Rule-based alerts
//! - Append-only history and journal logs, and the quote book
//! - [`Dashboard`], which ties them together as request/response actions
//!
//! It is used by `dashboard-cli`, but can also be driven by any other front end.

pub mod alerts;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod provider;
pub mod quotes;
pub mod report;
pub mod store;

pub use alerts::{AlertProfile, Alerts, evaluate};
pub use config::Config;
pub use dashboard::{Dashboard, Notice, Tone};
pub use error::FetchError;
pub use model::WeatherObservation;
pub use provider::WeatherProvider;
pub use quotes::{Quote, QuoteBook};
