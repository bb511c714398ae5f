//! Astronomy picture of the day service

use std::time::Duration;

use crate::cache::{apod_key, ResponseCache};
use crate::error::{AppError, AppResult};
use crate::external::ApodClient;

/// Serves the APOD metadata with a 24-hour cache.
#[derive(Clone)]
pub struct AstronomyService {
    apod: ApodClient,
    cache: ResponseCache,
    ttl: Duration,
}

impl AstronomyService {
    pub fn new(apod: ApodClient, cache: ResponseCache, ttl: Duration) -> Self {
        Self { apod, cache, ttl }
    }

    /// Return today's picture metadata, from cache when fresh.
    pub async fn picture_of_the_day(&self) -> AppResult<serde_json::Value> {
        let key = apod_key();
        if let Some(cached) = self.cache.get(&key, self.ttl).await {
            tracing::debug!("Serving APOD from cache");
            return Ok(cached);
        }

        tracing::info!("Fetching NASA APOD");
        let metadata = self.apod.fetch_apod().await?;

        let payload = serde_json::to_value(&metadata)
            .map_err(|e| AppError::Internal(format!("Failed to serialize APOD: {}", e)))?;
        self.cache.put(key, payload.clone()).await;

        Ok(payload)
    }
}
