use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

use crate::api::{ApiClient, ApiError};
use crate::model::HistoryEntry;

#[derive(Debug, Deserialize)]
struct HistoryDto {
    location: Option<String>,
    temperature: Option<f64>,
    description: Option<String>,
    icon: Option<String>,
    timestamp: Option<String>,
}

impl HistoryDto {
    fn into_entry(self) -> HistoryEntry {
        HistoryEntry {
            location: self.location,
            temperature: self.temperature,
            description: self.description,
            icon: self.icon,
            timestamp: self.timestamp.as_deref().and_then(parse_timestamp),
        }
    }
}

// The server emits naive ISO 8601 timestamps; tolerate an offset too.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

impl ApiClient {
    /// Load the lookup history, most recent first, in server order.
    pub async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let dtos: Vec<HistoryDto> = self.get_data("/api/weather/history", &[]).await?;
        Ok(dtos.into_iter().map(HistoryDto::into_entry).collect())
    }
}
