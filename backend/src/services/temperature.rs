//! Cold-snap alert service
//!
//! Pulls a trailing 7-day daily-mean temperature history from NASA POWER
//! and raises an alert when any day sits below the cold threshold.

use std::time::Duration;

use chrono::{Days, Utc};
use serde::Serialize;

use riego_shared::{has_cold_alert, Coordinates, DailyTemperature, COLD_ALERT_THRESHOLD_C};

use crate::cache::{temperature_alert_key, ResponseCache};
use crate::error::{AppError, AppResult};
use crate::external::PowerClient;

/// Days of history inspected for the alert.
const HISTORY_DAYS: u64 = 7;

/// Temperature alert response.
#[derive(Debug, Clone, Serialize)]
pub struct TemperatureAlertResponse {
    pub alert: bool,
    pub threshold: f64,
    pub location: Coordinates,
    pub days: Vec<DailyTemperature>,
}

#[derive(Clone)]
pub struct TemperatureAlertService {
    power: PowerClient,
    cache: ResponseCache,
    ttl: Duration,
}

impl TemperatureAlertService {
    pub fn new(power: PowerClient, cache: ResponseCache, ttl: Duration) -> Self {
        Self { power, cache, ttl }
    }

    /// Check the trailing week for daily means below the threshold.
    pub async fn temperature_alert(&self, coords: Coordinates) -> AppResult<serde_json::Value> {
        let key = temperature_alert_key(coords);
        if let Some(cached) = self.cache.get(&key, self.ttl).await {
            tracing::debug!("Serving temperature alert from cache: {}", key);
            return Ok(cached);
        }

        let end = Utc::now().date_naive();
        let start = end
            .checked_sub_days(Days::new(HISTORY_DAYS))
            .ok_or_else(|| AppError::Internal("Date window underflow".to_string()))?;

        let days = self
            .power
            .fetch_daily_temperature(coords.lat, coords.lon, start, end)
            .await?;

        let response = TemperatureAlertResponse {
            alert: has_cold_alert(&days, COLD_ALERT_THRESHOLD_C),
            threshold: COLD_ALERT_THRESHOLD_C,
            location: coords,
            days,
        };

        let payload = serde_json::to_value(&response)
            .map_err(|e| AppError::Internal(format!("Failed to serialize alert: {}", e)))?;
        self.cache.put(key, payload.clone()).await;

        Ok(payload)
    }
}
