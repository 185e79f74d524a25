//! Core library for the weather bot.
//!
//! This crate defines:
//! - The OpenWeatherMap lookup client
//! - The shared domain model (`WeatherReport`) and lookup errors
//! - Reply formatting helpers
//!
//! It is used by `weather-bot`, but knows nothing about Telegram and can be reused
//! by other binaries or services.

pub mod error;
pub mod format;
pub mod model;
pub mod provider;

pub use error::LookupError;
pub use format::{capitalize_first, format_reply};
pub use model::WeatherReport;
pub use provider::OpenWeatherClient;
