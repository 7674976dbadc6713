use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{ForecastRecord, HourlyPoint};

const FORECAST_URL: &str = "https://api.weatherapi.com/v1/forecast.json";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Place query must not be empty")]
    EmptyPlace,

    #[error("Failed to reach the forecast endpoint")]
    Transport(#[source] reqwest::Error),

    #[error("Forecast request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to decode forecast response")]
    Decode(#[source] serde_json::Error),

    #[error("Forecast response contained no forecast day")]
    MissingForecastDay,

    #[error("Forecast response contained no hourly data")]
    EmptyHourly,
}

/// Client for the weatherapi.com forecast endpoint.
///
/// Holds the API key for its whole lifetime; the credential is injected at
/// construction and never read from the environment here.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Fetch today's hourly forecast for `place`.
    ///
    /// `place` is passed through as-is; city names, postal codes and
    /// coordinate pairs are all validated by the provider, not here. One GET,
    /// no retries, transport-default timeouts.
    pub async fn fetch(&self, place: &str) -> Result<ForecastRecord, FetchError> {
        if place.trim().is_empty() {
            return Err(FetchError::EmptyPlace);
        }

        debug!("Requesting today's forecast for '{place}'");

        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", place),
                ("days", "1"),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Transport)?;

        // Status is checked before any field lookup, so a JSON-shaped error
        // body surfaces as an HTTP error rather than a decode error.
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        parse_forecast(&body)
    }
}

/// Decode a successful response body into a [`ForecastRecord`].
fn parse_forecast(body: &str) -> Result<ForecastRecord, FetchError> {
    let parsed: ApiResponse = serde_json::from_str(body).map_err(FetchError::Decode)?;

    let day = parsed
        .forecast
        .forecastday
        .into_iter()
        .next()
        .ok_or(FetchError::MissingForecastDay)?;

    if day.hour.is_empty() {
        return Err(FetchError::EmptyHourly);
    }

    let hourly_points = day
        .hour
        .into_iter()
        .map(|h| HourlyPoint {
            time: h.time,
            temp_c: h.temp_c,
        })
        .collect();

    Ok(ForecastRecord {
        place_name: parsed.location.name,
        local_time: parsed.location.localtime,
        current_temp_c: parsed.current.temp_c,
        last_updated: parsed.current.last_updated,
        hourly_points,
    })
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    last_updated: String,
}

#[derive(Debug, Deserialize)]
struct ApiHour {
    time: String,
    temp_c: f64,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDay {
    hour: Vec<ApiHour>,
}

#[derive(Debug, Deserialize)]
struct ApiForecast {
    forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    location: ApiLocation,
    current: ApiCurrent,
    forecast: ApiForecast,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TESTVILLE: &str = r#"{"location":{"name":"Testville","localtime":"2024-01-01 10:00"},"current":{"temp_c":5.0,"last_updated":"2024-01-01 10:00"},"forecast":{"forecastday":[{"hour":[{"time":"2024-01-01 00:00","temp_c":1.5},{"time":"2024-01-01 01:00","temp_c":2.0}]}]}}"#;

    #[test]
    fn parses_documented_response_shape() {
        let record = parse_forecast(TESTVILLE).expect("body must decode");

        assert_eq!(record.place_name, "Testville");
        assert_eq!(record.local_time, "2024-01-01 10:00");
        assert_eq!(record.current_temp_c, 5.0);
        assert_eq!(record.last_updated, "2024-01-01 10:00");
        assert_eq!(record.hourly_points.len(), 2);
        assert_eq!(record.hourly_points[0].time, "2024-01-01 00:00");
        assert_eq!(record.hourly_points[0].temp_c, 1.5);
        assert_eq!(record.hourly_points[1].temp_c, 2.0);
    }

    #[test]
    fn missing_forecast_key_is_a_decode_error() {
        let body = r#"{"location":{"name":"Testville","localtime":"2024-01-01 10:00"},"current":{"temp_c":5.0,"last_updated":"2024-01-01 10:00"}}"#;

        let err = parse_forecast(body).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = parse_forecast("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn empty_forecastday_array_is_rejected() {
        let body = r#"{"location":{"name":"Testville","localtime":"2024-01-01 10:00"},"current":{"temp_c":5.0,"last_updated":"2024-01-01 10:00"},"forecast":{"forecastday":[]}}"#;

        let err = parse_forecast(body).unwrap_err();
        assert!(matches!(err, FetchError::MissingForecastDay));
    }

    #[test]
    fn empty_hour_array_is_rejected() {
        let body = r#"{"location":{"name":"Testville","localtime":"2024-01-01 10:00"},"current":{"temp_c":5.0,"last_updated":"2024-01-01 10:00"},"forecast":{"forecastday":[{"hour":[]}]}}"#;

        let err = parse_forecast(body).unwrap_err();
        assert!(matches!(err, FetchError::EmptyHourly));
    }

    #[tokio::test]
    async fn blank_place_fails_before_any_request() {
        let client = WeatherApiClient::new("unused-key".to_string());

        let err = client.fetch("   ").await.unwrap_err();
        assert!(matches!(err, FetchError::EmptyPlace));
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);

        assert!(truncated.len() < body.len());
        assert!(truncated.ends_with("..."));
    }
}
