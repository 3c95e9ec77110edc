//! Display formatters: date labels and weather icons

use chrono::NaiveDate;

/// Format an ISO date as "Fri Dec 5".
///
/// Unparseable input renders the literal "Invalid Date" - the card shows it
/// as-is rather than hiding the row.
pub fn date_label(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%a %b %-d").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}

/// Pick an icon for a free-text forecast condition.
///
/// Case-insensitive substring match, first rule wins. The partly-cloudy rule
/// is checked before the bare cloudy rule so "Partly Cloudy" keeps its own
/// icon.
pub fn weather_icon(condition: &str) -> &'static str {
    let condition = condition.to_lowercase();

    if condition.contains("thunder") || condition.contains("storm") {
        "⛈"
    } else if condition.contains("heavy rain") {
        "🌧"
    } else if condition.contains("showers") || condition.contains("rain") {
        "🌦"
    } else if condition.contains("partly cloudy") || condition.contains("fair") {
        "⛅"
    } else if condition.contains("cloudy") {
        "☁"
    } else if condition.contains("hazy") {
        "🌫"
    } else if condition.contains("windy") {
        "💨"
    } else {
        "☀"
    }
}
