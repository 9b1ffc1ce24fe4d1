//! Human-facing formatting for dashboard values.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Placeholder for absent beach/tide fields.
pub const MISSING: &str = "--";
/// Placeholder for a history entry without a temperature.
pub const NOT_AVAILABLE: &str = "N/A";

/// Celsius to Fahrenheit, rounded to the nearest whole degree.
pub fn celsius_to_fahrenheit(celsius: f64) -> i64 {
    (celsius * 1.8 + 32.0).round() as i64
}

/// Rounded Fahrenheit display, e.g. 59.9 → "60°F".
pub fn fahrenheit(temp: Option<f64>) -> String {
    match temp {
        Some(t) => format!("{}°F", t.round() as i64),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Humidity percentage display.
pub fn humidity(pct: Option<f64>) -> String {
    match pct {
        Some(p) => format!("{}%", p.round() as i64),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Water temperature arrives in Celsius and is shown in Fahrenheit.
pub fn water_temp(celsius: Option<f64>) -> String {
    match celsius {
        Some(c) => format!("{}°F", celsius_to_fahrenheit(c)),
        None => MISSING.to_string(),
    }
}

pub fn wave_height(feet: Option<f64>) -> String {
    one_decimal(feet, "ft")
}

pub fn swell_period(seconds: Option<f64>) -> String {
    one_decimal(seconds, "s")
}

fn one_decimal(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.1} {unit}"),
        None => MISSING.to_string(),
    }
}

/// Hour:minute display for a tide time.
pub fn tide_time(time: Option<DateTime<FixedOffset>>) -> String {
    match time {
        Some(t) => t.format("%H:%M").to_string(),
        None => MISSING.to_string(),
    }
}

/// Hour:minute display for a history timestamp.
pub fn history_time(time: Option<NaiveDateTime>) -> String {
    match time {
        Some(t) => t.format("%H:%M").to_string(),
        None => String::new(),
    }
}
