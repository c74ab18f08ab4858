//! Core library for the `panahon` weather lookup tool.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and its OpenWeatherMap implementation
//! - The query session (query string, latest snapshot, fetch bookkeeping)
//! - Rendering of the three result states
//!
//! It is used by `panahon-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod session;
pub mod view;

pub use config::Config;
pub use error::FetchError;
pub use model::WeatherSnapshot;
pub use provider::{WeatherProvider, provider_from_config};
pub use session::{FetchOutcome, FetchTicket, QuerySession, ViewState};
