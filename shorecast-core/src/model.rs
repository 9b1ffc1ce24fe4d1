use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Geographic coordinates carried by a successful weather lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Normalized current-weather record for one location.
///
/// Replaced on every successful lookup; everything except the display name
/// may be missing from the server payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_f: Option<f64>,
    pub description: Option<String>,
    pub humidity_pct: Option<f64>,
    pub icon: Option<String>,
    pub coord: Option<Coordinates>,
}

/// One previously performed lookup, as returned by the history endpoint.
/// Read-only on this side; the server appends entries itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub location: Option<String>,
    pub temperature: Option<f64>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
}

impl HistoryEntry {
    /// Location text to resubmit when this entry is replayed: everything
    /// before the first comma ("Paris, FR" replays as "Paris").
    pub fn replay_location(&self) -> Option<String> {
        let location = self.location.as_deref()?;
        let city = location.split(',').next().unwrap_or(location).trim();
        if city.is_empty() {
            None
        } else {
            Some(city.to_string())
        }
    }
}

/// Beach and tide conditions for the last looked-up coordinates.
///
/// Every field is independently optional; display degrades per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeachReport {
    pub next_high_tide: Option<DateTime<FixedOffset>>,
    pub next_low_tide: Option<DateTime<FixedOffset>>,
    pub water_temp_c: Option<f64>,
    pub wave_height_ft: Option<f64>,
    pub swell_period_s: Option<f64>,
}
