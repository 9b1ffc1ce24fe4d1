use serde::Deserialize;

use crate::api::{ApiClient, ApiError};
use crate::model::{Coordinates, WeatherReport};
use crate::query::LookupQuery;

/// Weather payload as produced by the dashboard server.
///
/// Two shapes exist in the wild: the flattened stored-record shape
/// (`location`/`temperature`/`humidity`) and the raw provider shape
/// (`name`/`main.temp`/`main.humidity`). Both are accepted.
#[derive(Debug, Deserialize)]
struct WeatherDto {
    location: Option<String>,
    name: Option<String>,
    temperature: Option<f64>,
    description: Option<String>,
    humidity: Option<f64>,
    icon: Option<String>,
    main: Option<MainDto>,
    coord: Option<CoordDto>,
}

#[derive(Debug, Deserialize)]
struct MainDto {
    temp: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CoordDto {
    lat: Option<f64>,
    lon: Option<f64>,
}

impl WeatherDto {
    fn into_report(self) -> Result<WeatherReport, ApiError> {
        // A payload with no display name at all is malformed.
        let location = self
            .location
            .or(self.name)
            .filter(|l| !l.is_empty())
            .ok_or(ApiError::Api { message: None })?;

        let temperature_f = self.temperature.or(self.main.as_ref().and_then(|m| m.temp));
        let humidity_pct = self.humidity.or(self.main.as_ref().and_then(|m| m.humidity));
        let coord = self.coord.and_then(|c| match (c.lat, c.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
            _ => None,
        });

        Ok(WeatherReport {
            location,
            temperature_f,
            description: self.description,
            humidity_pct,
            icon: self.icon,
            coord,
        })
    }
}

impl ApiClient {
    /// Primary lookup: one GET to `/api/weather`, keyed by ZIP or city.
    /// No retries; any failure maps to a single [`ApiError`].
    pub async fn fetch_weather(&self, query: &LookupQuery) -> Result<WeatherReport, ApiError> {
        let params = match query {
            LookupQuery::PostalCode(zip) => [("zip", zip.clone())],
            LookupQuery::PlaceName(city) => [("city", city.clone())],
        };

        let dto: WeatherDto = self.get_data("/api/weather", &params).await?;
        dto.into_report()
    }
}
