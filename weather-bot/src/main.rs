//! Binary crate for the Telegram weather bot.
//!
//! This crate focuses on:
//! - Reading credentials from the environment
//! - Wiring the teloxide command dispatcher
//! - Mapping lookup results to user-facing replies

use teloxide::Bot;
use tracing_subscriber::EnvFilter;
use weather_core::OpenWeatherClient;

mod bot;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Missing credentials abort here, before any update is polled.
    let config = config::Config::from_env()?;

    let client = OpenWeatherClient::new(config.weather_api_key.clone());
    let bot = Bot::new(config.bot_token.clone());

    tracing::info!(city = config::DEFAULT_CITY, "starting weather bot");
    bot::run(bot, client).await
}
