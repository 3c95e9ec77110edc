//! NEA real-time weather client
//!
//! Two unauthenticated endpoints share the `{ data: { records: [...] } }`
//! envelope: the 4-day outlook and the island-wide air-temperature readings.
//! Both are fetched concurrently and merged into one [`WeatherReport`];
//! either failing fails the whole pipeline, so the UI never shows a partial
//! render.

use serde::Deserialize;
use thiserror::Error;

use crate::state::{ForecastDay, WeatherReport};

const FOUR_DAY_OUTLOOK_URL: &str =
    "https://api-open.data.gov.sg/v2/real-time/api/four-day-outlook";
const AIR_TEMPERATURE_URL: &str = "https://api-open.data.gov.sg/v2/real-time/api/air-temperature";

/// Fallback when no station reports a reading.
pub const DEFAULT_TEMP_C: i32 = 28;

/// Station closest to the crew's home beach (Pasir Ris).
const PREFERRED_STATION: &str = "S109";

/// How many outlook days to keep.
const OUTLOOK_DAYS: usize = 4;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Unable to load weather data: {0}")]
    Request(#[from] reqwest::Error),
    #[error("No forecast data available")]
    NoForecast,
}

// ===== Response envelope =====

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct OutlookData {
    #[serde(default)]
    records: Vec<OutlookRecord>,
}

#[derive(Debug, Deserialize)]
struct OutlookRecord {
    #[serde(default)]
    forecasts: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastEntry {
    day: String,
    forecast: ForecastText,
    temperature: TempRange,
}

#[derive(Debug, Deserialize)]
struct ForecastText {
    text: String,
    #[serde(default)]
    summary: String,
}

#[derive(Debug, Deserialize)]
struct TempRange {
    high: f64,
    low: f64,
}

#[derive(Debug, Deserialize)]
struct ReadingData {
    #[serde(default)]
    records: Vec<Reading>,
}

/// One sensor reading tagged with its station.
#[derive(Debug, Deserialize)]
pub(crate) struct Reading {
    #[serde(rename = "stationId", default)]
    station_id: Option<String>,
    #[serde(default)]
    value: Option<f64>,
}

// ===== Pipeline =====

/// Fetch both endpoints concurrently and merge them.
pub async fn fetch_report() -> Result<WeatherReport, WeatherError> {
    let (forecasts, readings) = tokio::try_join!(fetch_outlook(), fetch_readings())?;
    build_report(forecasts, &readings)
}

async fn fetch_outlook() -> Result<Vec<ForecastEntry>, reqwest::Error> {
    let envelope: Envelope<OutlookData> = reqwest::get(FOUR_DAY_OUTLOOK_URL)
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(envelope
        .data
        .records
        .into_iter()
        .next()
        .map(|record| record.forecasts)
        .unwrap_or_default())
}

async fn fetch_readings() -> Result<Vec<Reading>, reqwest::Error> {
    let envelope: Envelope<ReadingData> = reqwest::get(AIR_TEMPERATURE_URL)
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(envelope.data.records)
}

fn build_report(
    forecasts: Vec<ForecastEntry>,
    readings: &[Reading],
) -> Result<WeatherReport, WeatherError> {
    if forecasts.is_empty() {
        return Err(WeatherError::NoForecast);
    }

    let days = forecasts
        .into_iter()
        .take(OUTLOOK_DAYS)
        .map(|entry| ForecastDay {
            day: entry.day,
            condition: entry.forecast.text,
            summary: entry.forecast.summary,
            high: entry.temperature.high,
            low: entry.temperature.low,
        })
        .collect();

    Ok(WeatherReport {
        current_temp: current_temperature(readings),
        days,
    })
}

/// Derive the display temperature: the preferred station if it reports a
/// value, else the first record, else [`DEFAULT_TEMP_C`]. Rounded.
fn current_temperature(readings: &[Reading]) -> i32 {
    let preferred = readings.iter().find(|r| {
        r.station_id.as_deref().is_some_and(|id| {
            id == PREFERRED_STATION || id.to_lowercase().contains("pasir")
        })
    });

    if let Some(value) = preferred.and_then(|r| r.value) {
        return value.round() as i32;
    }

    readings
        .first()
        .and_then(|r| r.value)
        .map(|v| v.round() as i32)
        .unwrap_or(DEFAULT_TEMP_C)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(json: &str) -> Vec<Reading> {
        serde_json::from_str(json).unwrap()
    }

    fn forecasts(json: &str) -> Vec<ForecastEntry> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn preferred_station_wins_and_rounds() {
        let records = readings(
            r#"[
                {"stationId": "S44", "value": 29.1},
                {"stationId": "S109", "value": 31.7}
            ]"#,
        );
        assert_eq!(current_temperature(&records), 32);
    }

    #[test]
    fn falls_back_to_first_record() {
        let records = readings(r#"[{"stationId": "S44", "value": 29.4}]"#);
        assert_eq!(current_temperature(&records), 29);
    }

    #[test]
    fn empty_records_yield_default() {
        assert_eq!(current_temperature(&[]), DEFAULT_TEMP_C);
    }

    #[test]
    fn valueless_preferred_station_falls_through() {
        let records = readings(
            r#"[
                {"stationId": "S44", "value": 30.2},
                {"stationId": "S109"}
            ]"#,
        );
        assert_eq!(current_temperature(&records), 30);
    }

    #[test]
    fn envelope_parses() {
        let raw = r#"{
            "data": {
                "records": [{
                    "forecasts": [{
                        "day": "Friday",
                        "forecast": {"text": "Thundery Showers", "summary": "Afternoon storms"},
                        "temperature": {"high": 33, "low": 26}
                    }]
                }]
            }
        }"#;
        let envelope: Envelope<OutlookData> = serde_json::from_str(raw).unwrap();
        let forecasts = envelope.data.records.into_iter().next().unwrap().forecasts;
        assert_eq!(forecasts.len(), 1);
        assert_eq!(forecasts[0].day, "Friday");
    }

    #[test]
    fn report_trims_to_four_days() {
        let entries = forecasts(
            r#"[
                {"day": "Mon", "forecast": {"text": "Fair"}, "temperature": {"high": 32, "low": 26}},
                {"day": "Tue", "forecast": {"text": "Fair"}, "temperature": {"high": 32, "low": 26}},
                {"day": "Wed", "forecast": {"text": "Fair"}, "temperature": {"high": 32, "low": 26}},
                {"day": "Thu", "forecast": {"text": "Fair"}, "temperature": {"high": 32, "low": 26}},
                {"day": "Fri", "forecast": {"text": "Fair"}, "temperature": {"high": 32, "low": 26}}
            ]"#,
        );
        let report = build_report(entries, &[]).unwrap();
        assert_eq!(report.days.len(), 4);
        assert_eq!(report.current_temp, DEFAULT_TEMP_C);
        assert_eq!(report.days[0].day, "Mon");
    }

    #[test]
    fn empty_forecasts_are_an_error_not_a_partial_render() {
        let records = readings(r#"[{"stationId": "S109", "value": 31.0}]"#);
        let result = build_report(vec![], &records);
        assert!(matches!(result, Err(WeatherError::NoForecast)));
        assert_eq!(
            WeatherError::NoForecast.to_string(),
            "No forecast data available"
        );
    }
}
