/// Result of a successful weather lookup, built fresh per request and discarded
/// after formatting.
///
/// Only constructed once the provider payload has been validated to contain a
/// temperature section and a non-empty condition list.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// City name as resolved by the provider; may differ from the requested
    /// spelling or capitalization.
    pub city: String,
    pub temperature_c: f64,
    /// Condition description with its first character capitalized for display.
    pub description: String,
}
