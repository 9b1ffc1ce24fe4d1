use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::api::{ApiClient, ApiError};
use crate::model::BeachReport;

#[derive(Debug, Deserialize)]
struct BeachDto {
    tides: Option<TidesDto>,
    conditions: Option<ConditionsDto>,
}

#[derive(Debug, Deserialize)]
struct TidesDto {
    data: Option<Vec<TideExtremeDto>>,
}

#[derive(Debug, Deserialize)]
struct TideExtremeDto {
    #[serde(rename = "type")]
    kind: Option<String>,
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConditionsDto {
    hours: Option<Vec<HourDto>>,
}

#[derive(Debug, Deserialize)]
struct HourDto {
    #[serde(rename = "waterTemperature")]
    water_temperature: Option<SourcedValue>,
    #[serde(rename = "waveHeight")]
    wave_height: Option<SourcedValue>,
    #[serde(rename = "swellPeriod")]
    swell_period: Option<SourcedValue>,
}

/// Numeric reading nested one level under its source key.
#[derive(Debug, Deserialize)]
struct SourcedValue {
    noaa: Option<f64>,
}

impl BeachDto {
    fn into_report(self) -> BeachReport {
        let extremes = self
            .tides
            .and_then(|t| t.data)
            .unwrap_or_default();

        let first_of = |kind: &str| {
            extremes
                .iter()
                .find(|e| e.kind.as_deref() == Some(kind))
                .and_then(|e| e.time.as_deref())
                .and_then(parse_tide_time)
        };
        let next_high_tide = first_of("high");
        let next_low_tide = first_of("low");

        let latest = self
            .conditions
            .and_then(|c| c.hours)
            .and_then(|mut hours| if hours.is_empty() { None } else { Some(hours.remove(0)) });

        let reading = |v: &Option<SourcedValue>| v.as_ref().and_then(|s| s.noaa);
        let (water_temp_c, wave_height_ft, swell_period_s) = match &latest {
            Some(hour) => (
                reading(&hour.water_temperature),
                reading(&hour.wave_height),
                reading(&hour.swell_period),
            ),
            None => (None, None, None),
        };

        BeachReport {
            next_high_tide,
            next_low_tide,
            water_temp_c,
            wave_height_ft,
            swell_period_s,
        }
    }
}

fn parse_tide_time(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}

impl ApiClient {
    /// Opportunistic beach/tide lookup for the given coordinates.
    pub async fn fetch_beach(&self, lat: f64, lon: f64) -> Result<BeachReport, ApiError> {
        let params = [("lat", lat.to_string()), ("lng", lon.to_string())];
        let dto: BeachDto = self.get_data("/api/beach", &params).await?;
        Ok(dto.into_report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload() {
        let dto: BeachDto = serde_json::from_value(json!({
            "tides": {"data": [
                {"type": "low", "time": "2026-08-28T20:05:00+00:00"},
                {"type": "high", "time": "2026-08-28T14:32:00+00:00"}
            ]},
            "conditions": {"hours": [
                {"waterTemperature": {"noaa": 20.0},
                 "waveHeight": {"noaa": 1.26},
                 "swellPeriod": {"noaa": 12.0}},
                {"waterTemperature": {"noaa": 19.0},
                 "waveHeight": {"noaa": 1.5},
                 "swellPeriod": {"noaa": 11.0}}
            ]}
        }))
        .expect("deserializes");

        let report = dto.into_report();
        assert!(report.next_high_tide.is_some());
        assert!(report.next_low_tide.is_some());
        // Only the first hour is the current reading.
        assert_eq!(report.water_temp_c, Some(20.0));
        assert_eq!(report.wave_height_ft, Some(1.26));
        assert_eq!(report.swell_period_s, Some(12.0));
    }

    #[test]
    fn fields_are_independently_optional() {
        let dto: BeachDto = serde_json::from_value(json!({
            "tides": {"data": [{"type": "high", "time": "2026-08-28T14:32:00+00:00"}]},
            "conditions": {"hours": [{"waveHeight": {"noaa": 2.0}}]}
        }))
        .expect("deserializes");

        let report = dto.into_report();
        assert!(report.next_high_tide.is_some());
        assert!(report.next_low_tide.is_none());
        assert!(report.water_temp_c.is_none());
        assert_eq!(report.wave_height_ft, Some(2.0));
        assert!(report.swell_period_s.is_none());
    }

    #[test]
    fn empty_payload_yields_empty_report() {
        let dto: BeachDto = serde_json::from_value(json!({})).expect("deserializes");
        let report = dto.into_report();
        assert!(report.next_high_tide.is_none());
        assert!(report.next_low_tide.is_none());
        assert!(report.water_temp_c.is_none());
    }
}
