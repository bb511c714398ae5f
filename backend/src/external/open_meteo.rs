//! Open-Meteo forecast client
//!
//! Fetches hourly reference evapotranspiration, temperature and relative
//! humidity for a coordinate, with the time zone inferred from the
//! coordinate by the provider.

use reqwest::Client;
use serde::Deserialize;

use riego_shared::FORECAST_HOURS;

use crate::error::{AppError, AppResult};

/// Open-Meteo API client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

/// Aligned hourly series for the next 24 hours plus the current reading.
///
/// All four series have the same length; index i refers to the same hour
/// in each of them.
#[derive(Debug, Clone)]
pub struct HourlyWeather {
    pub et0_mm: Vec<f64>,
    pub temperatures: Vec<f64>,
    pub humidity: Vec<f64>,
    pub times: Vec<String>,
    pub current_temperature: f64,
    pub current_humidity: f64,
}

/// Open-Meteo API response
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlyBlock,
    current_weather: CurrentWeatherBlock,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    // The provider reports gaps as nulls; they count as zero downstream.
    et0_fao_evapotranspiration: Vec<Option<f64>>,
    temperature_2m: Vec<f64>,
    relative_humidity_2m: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherBlock {
    temperature: f64,
}

impl OpenMeteoClient {
    /// Create a new OpenMeteoClient
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the next 24 hours of forecast data for a coordinate.
    pub async fn fetch_forecast(&self, latitude: f64, longitude: f64) -> AppResult<HourlyWeather> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&hourly=et0_fao_evapotranspiration,temperature_2m,relative_humidity_2m&current_weather=true&timezone=auto",
            self.base_url, latitude, longitude
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Open-Meteo request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!(
                "Open-Meteo error: {} - {}",
                status, body
            )));
        }

        let data: ForecastResponse = response.json().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!("Failed to parse Open-Meteo response: {}", e))
        })?;

        convert_forecast_response(data)
    }
}

/// Truncate the hourly series to the forecast window and check alignment.
fn convert_forecast_response(data: ForecastResponse) -> AppResult<HourlyWeather> {
    let mut et0_mm: Vec<f64> = data
        .hourly
        .et0_fao_evapotranspiration
        .into_iter()
        .map(|v| v.unwrap_or(0.0))
        .collect();
    let mut temperatures = data.hourly.temperature_2m;
    let mut humidity = data.hourly.relative_humidity_2m;
    let mut times = data.hourly.time;

    et0_mm.truncate(FORECAST_HOURS);
    temperatures.truncate(FORECAST_HOURS);
    humidity.truncate(FORECAST_HOURS);
    times.truncate(FORECAST_HOURS);

    if et0_mm.is_empty() {
        return Err(AppError::UpstreamUnavailable(
            "Open-Meteo returned an empty hourly series".to_string(),
        ));
    }
    if et0_mm.len() != temperatures.len()
        || et0_mm.len() != humidity.len()
        || et0_mm.len() != times.len()
    {
        return Err(AppError::UpstreamUnavailable(format!(
            "Open-Meteo returned misaligned hourly series: {}/{}/{}/{}",
            et0_mm.len(),
            temperatures.len(),
            humidity.len(),
            times.len()
        )));
    }

    let current_humidity = humidity[0];

    Ok(HourlyWeather {
        et0_mm,
        temperatures,
        humidity,
        times,
        current_temperature: data.current_weather.temperature,
        current_humidity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response(hours: usize) -> ForecastResponse {
        let value = json!({
            "hourly": {
                "time": (0..hours).map(|h| format!("2024-06-01T{:02}:00", h % 24)).collect::<Vec<_>>(),
                "et0_fao_evapotranspiration": vec![Some(0.1); hours],
                "temperature_2m": vec![21.5; hours],
                "relative_humidity_2m": vec![48.0; hours],
            },
            "current_weather": { "temperature": 22.3 },
        });
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_series_truncated_to_window() {
        let weather = convert_forecast_response(sample_response(72)).unwrap();
        assert_eq!(weather.et0_mm.len(), FORECAST_HOURS);
        assert_eq!(weather.temperatures.len(), FORECAST_HOURS);
        assert_eq!(weather.humidity.len(), FORECAST_HOURS);
        assert_eq!(weather.times.len(), FORECAST_HOURS);
        assert_eq!(weather.current_temperature, 22.3);
        assert_eq!(weather.current_humidity, 48.0);
    }

    #[test]
    fn test_null_et0_samples_become_zero() {
        let mut data = sample_response(24);
        data.hourly.et0_fao_evapotranspiration[3] = None;
        let weather = convert_forecast_response(data).unwrap();
        assert_eq!(weather.et0_mm[3], 0.0);
    }

    #[test]
    fn test_empty_series_is_upstream_error() {
        let err = convert_forecast_response(sample_response(0)).unwrap_err();
        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
    }

    #[test]
    fn test_misaligned_series_is_upstream_error() {
        let mut data = sample_response(24);
        data.hourly.temperature_2m.pop();
        let err = convert_forecast_response(data).unwrap_err();
        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
    }
}
