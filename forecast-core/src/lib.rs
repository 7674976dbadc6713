//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The weatherapi.com forecast client
//! - CSV persistence of hourly forecast data
//! - Chart rendering of the stored table
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or
//! services.

pub mod config;
pub mod model;
pub mod plot;
pub mod provider;
pub mod store;

pub use config::{Config, ConfigError};
pub use model::{ForecastRecord, HourlyPoint};
pub use plot::PlotError;
pub use provider::{FetchError, WeatherApiClient};
pub use store::{CsvStore, StoreError};
