//! Presentation Helpers
//!
//! Pure functions that turn readings, stats, and history into the strings
//! the components render. Kept free of signals and DOM access so every
//! displayed value can be unit tested.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::state::global::{Reading, Stats, Unit};

/// Format a temperature value to one decimal place.
pub fn format_temp(value: f64) -> String {
    format!("{:.1}", value)
}

/// Parse a server timestamp. Accepts RFC 3339 as well as the naive
/// ISO-8601 form the server emits, with or without fractional seconds.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Relative "time since" string for a past timestamp. Falls back to an
/// absolute date-time once the reading is more than an hour old.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);
    if secs < 60 {
        format!("{} seconds ago", secs)
    } else if secs < 3600 {
        format!("{} minutes ago", secs / 60)
    } else {
        then.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Color class for a temperature, always keyed on the Celsius value
/// regardless of the displayed unit.
pub fn temperature_class(celsius: f64) -> &'static str {
    if celsius < 0.0 {
        "temp-freezing"
    } else if celsius < 10.0 {
        "temp-cold"
    } else if celsius < 20.0 {
        "temp-cool"
    } else if celsius < 30.0 {
        "temp-warm"
    } else {
        "temp-hot"
    }
}

/// Everything the current-temperature card displays.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentView {
    /// Value in the active unit, one decimal
    pub primary: String,
    /// Converted pair with its unit suffix
    pub secondary: String,
    /// Color class keyed on the Celsius value
    pub class: &'static str,
    /// Relative "time since" string
    pub updated: String,
}

/// Build the current-temperature card contents for a reading.
pub fn current_view(reading: &Reading, unit: Unit, now: DateTime<Utc>) -> CurrentView {
    let secondary_unit = unit.toggled();
    let updated = parse_timestamp(&reading.timestamp)
        .map(|then| format_relative(then, now))
        .unwrap_or_else(|| "No data available".to_string());

    CurrentView {
        primary: format_temp(reading.in_unit(unit)),
        secondary: format!(
            "{}{}",
            format_temp(reading.in_unit(secondary_unit)),
            secondary_unit.suffix()
        ),
        class: temperature_class(reading.temperature),
        updated,
    }
}

/// Placeholder card contents while the server has no data.
pub fn placeholder_view(unit: Unit) -> CurrentView {
    CurrentView {
        primary: "--".to_string(),
        secondary: format!("--{}", unit.toggled().suffix()),
        class: "",
        updated: "No data available".to_string(),
    }
}

/// Min/max/avg display strings in the active unit.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsView {
    pub min: String,
    pub max: String,
    pub avg: String,
}

/// Convert and format statistics for display.
pub fn stats_view(stats: &Stats, unit: Unit) -> StatsView {
    let fmt = |celsius: f64| format!("{}{}", format_temp(unit.from_celsius(celsius)), unit.suffix());
    StatsView {
        min: fmt(stats.min),
        max: fmt(stats.max),
        avg: fmt(stats.avg),
    }
}

/// Build the chart's label and value sequences from the reading history.
/// Labels are time-of-day in history order; values follow the active unit.
pub fn chart_series(history: &[Reading], unit: Unit) -> (Vec<String>, Vec<f64>) {
    let labels = history
        .iter()
        .map(|reading| {
            parse_timestamp(&reading.timestamp)
                .map(|ts| ts.format("%H:%M:%S").to_string())
                .unwrap_or_default()
        })
        .collect();
    let values = history.iter().map(|reading| reading.in_unit(unit)).collect();
    (labels, values)
}
