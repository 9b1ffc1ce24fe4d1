//! Core library for the `shorecast` dashboard client.
//!
//! This crate defines:
//! - Input classification (city name vs. ZIP code)
//! - The HTTP client for the dashboard server's `/api/*` endpoints
//! - The dashboard state object and its transitions
//! - The fetch-orchestration controller tying them together
//!
//! It is used by `shorecast-cli`, but can also be reused by other front-ends.

pub mod api;
pub mod config;
pub mod controller;
pub mod display;
pub mod model;
pub mod query;
pub mod state;

pub use api::{ApiClient, ApiError};
pub use config::Config;
pub use controller::{Dashboard, ERROR_DISMISS_AFTER};
pub use model::{BeachReport, Coordinates, HistoryEntry, WeatherReport};
pub use query::{LookupQuery, QueryError, classify};
pub use state::{DashboardState, Phase};
