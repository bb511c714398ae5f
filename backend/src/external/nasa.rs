//! NASA API clients
//!
//! Two independent services share the agency's key scheme: APOD (the
//! astronomy picture of the day) and POWER (daily agro-climate data,
//! used here for a trailing temperature history).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use riego_shared::DailyTemperature;

use crate::error::{AppError, AppResult};

/// Value POWER reports for days without data.
const POWER_FILL_VALUE: f64 = -999.0;

/// Astronomy Picture of the Day client
#[derive(Clone)]
pub struct ApodClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// APOD metadata, camelCase on the wire for client compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApodMetadata {
    pub title: String,
    pub explanation: String,
    pub url: String,
    pub media_type: String,
    pub date: String,
}

/// APOD API response
#[derive(Debug, Deserialize)]
struct ApodApiResponse {
    title: String,
    explanation: String,
    url: String,
    media_type: String,
    date: String,
}

impl ApodClient {
    /// Create a new ApodClient
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Fetch today's astronomy picture metadata.
    pub async fn fetch_apod(&self) -> AppResult<ApodMetadata> {
        let url = format!("{}?api_key={}", self.base_url, self.api_key);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!("NASA APOD request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!(
                "NASA APOD error: {} - {}",
                status, body
            )));
        }

        let data: ApodApiResponse = response.json().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!("Failed to parse APOD response: {}", e))
        })?;

        Ok(ApodMetadata {
            title: data.title,
            explanation: data.explanation,
            url: data.url,
            media_type: data.media_type,
            date: data.date,
        })
    }
}

/// NASA POWER daily-point client
#[derive(Clone)]
pub struct PowerClient {
    client: Client,
    base_url: String,
}

/// POWER API response, reduced to the one parameter we request.
#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: PowerParameter,
}

#[derive(Debug, Deserialize)]
struct PowerParameter {
    // BTreeMap keeps the YYYYMMDD keys in date order.
    #[serde(rename = "T2M")]
    t2m: BTreeMap<String, f64>,
}

impl PowerClient {
    /// Create a new PowerClient
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch daily mean temperatures for a coordinate and date window.
    pub async fn fetch_daily_temperature(
        &self,
        latitude: f64,
        longitude: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailyTemperature>> {
        let url = format!(
            "{}?parameters=T2M&community=AG&longitude={}&latitude={}&start={}&end={}&format=JSON",
            self.base_url,
            longitude,
            latitude,
            start.format("%Y%m%d"),
            end.format("%Y%m%d")
        );

        tracing::debug!("Querying NASA POWER: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!("NASA POWER request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!(
                "NASA POWER error: {} - {}",
                status, body
            )));
        }

        let data: PowerResponse = response.json().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!("Failed to parse POWER response: {}", e))
        })?;

        Ok(convert_power_response(data))
    }
}

/// Flatten the date-keyed map to ordered records, skipping fill values.
fn convert_power_response(data: PowerResponse) -> Vec<DailyTemperature> {
    data.properties
        .parameter
        .t2m
        .into_iter()
        .filter_map(|(date_str, temp_avg)| {
            if temp_avg == POWER_FILL_VALUE {
                return None;
            }
            match NaiveDate::parse_from_str(&date_str, "%Y%m%d") {
                Ok(date) => Some(DailyTemperature { date, temp_avg }),
                Err(_) => {
                    tracing::warn!("Skipping unparseable POWER date key: {}", date_str);
                    None
                }
            }
        })
        .collect()
}
