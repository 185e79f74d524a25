use anyhow::{Context, Result};

/// The one city the bot reports on. Fixed at compile time; the bot exposes no
/// per-chat or per-request city selection.
pub const DEFAULT_CITY: &str = "Moscow";

/// Credentials read once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub weather_api_key: String,
}

impl Config {
    /// Read required credentials from the process environment (after `dotenvy`
    /// has merged in any `.env` file).
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup. Keeps parsing testable
    /// without mutating the process environment.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = get("TELEGRAM_BOT_TOKEN")
            .filter(|v| !v.is_empty())
            .context("TELEGRAM_BOT_TOKEN is not set; add it to the environment or a .env file")?;

        let weather_api_key = get("WEATHER_API_KEY")
            .filter(|v| !v.is_empty())
            .context("WEATHER_API_KEY is not set; add it to the environment or a .env file")?;

        Ok(Self {
            bot_token,
            weather_api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn both_credentials_present() {
        let cfg = Config::from_vars(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("WEATHER_API_KEY", "owm-key"),
        ]))
        .expect("config should load");

        assert_eq!(cfg.bot_token, "123:abc");
        assert_eq!(cfg.weather_api_key, "owm-key");
    }

    #[test]
    fn missing_bot_token_is_fatal() {
        let err = Config::from_vars(lookup(&[("WEATHER_API_KEY", "owm-key")])).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn missing_weather_api_key_is_fatal() {
        let err = Config::from_vars(lookup(&[("TELEGRAM_BOT_TOKEN", "123:abc")])).unwrap_err();
        assert!(err.to_string().contains("WEATHER_API_KEY"));
    }

    #[test]
    fn empty_credential_counts_as_missing() {
        let err = Config::from_vars(lookup(&[
            ("TELEGRAM_BOT_TOKEN", ""),
            ("WEATHER_API_KEY", "owm-key"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }
}
