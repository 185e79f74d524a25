use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::{error::LookupError, format::capitalize_first, model::WeatherReport};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Client for the OpenWeatherMap current-weather endpoint.
///
/// One lookup issues exactly one outbound GET with metric units and Russian
/// condition text; there are no retries and no timeout beyond the transport
/// defaults.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host. Used by tests to target a local
    /// mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// Look up the current weather for `city`.
    ///
    /// Transport-level failures (unreachable host, unreadable body, non-2xx
    /// status) map to [`LookupError::TransportFailure`]; a 2xx answer whose body
    /// is not the expected shape maps to [`LookupError::InvalidPayload`].
    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "ru"),
            ])
            .send()
            .await
            .map_err(|e| LookupError::TransportFailure(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| LookupError::TransportFailure(e.to_string()))?;

        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "weather provider returned an error status");
            return Err(LookupError::TransportFailure(format!(
                "status {status}"
            )));
        }

        let parsed: OwCurrentResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(error = %err, body = %truncate_body(&body), "could not parse weather payload");
                return Err(LookupError::InvalidPayload);
            }
        };

        let Some(condition) = parsed.weather.first() else {
            warn!(body = %truncate_body(&body), "weather payload has an empty condition list");
            return Err(LookupError::InvalidPayload);
        };

        Ok(WeatherReport {
            city: parsed.name,
            temperature_c: parsed.main.temp,
            description: capitalize_first(&condition.description),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwCondition>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Byte 200 may land inside a multi-byte character (lang=ru bodies are
    // mostly Cyrillic), so back up to the nearest char boundary.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...", &body[..end])
}
