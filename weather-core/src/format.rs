use crate::model::WeatherReport;

/// Uppercase the first character of `s`, leaving the rest untouched.
///
/// Works on chars, so Cyrillic condition descriptions from the provider are
/// handled the same as ASCII ones.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render a report as the three-line chat reply.
///
/// Pure and deterministic; the report is valid by construction, so there is no
/// failure mode here.
pub fn format_reply(report: &WeatherReport) -> String {
    format!(
        "Погода в городе {}:\n🌡 Температура: {:.1}°C\n🌥 Описание: {}",
        report.city, report.temperature_c, report.description,
    )
}
