//! Watering calculation service
//!
//! Orchestrates the cache check, the forecast fetch, the pure irrigation
//! calculation, and the cache write. The cache stores the fully
//! serialized response so repeated identical requests within the TTL
//! return byte-identical JSON.

use std::time::Duration;

use riego_shared::{
    estimate_watering, plant_or_default, CalculationBreakdown, Coordinates, HourlyForecast,
    PlantSnapshot, WateringResponse, POT_DIAMETER_CM,
};

use crate::cache::{watering_key, ResponseCache};
use crate::error::{AppError, AppResult};
use crate::external::OpenMeteoClient;

/// Service computing the daily water volume for a pot at a coordinate.
#[derive(Clone)]
pub struct WateringService {
    weather: OpenMeteoClient,
    cache: ResponseCache,
    ttl: Duration,
}

impl WateringService {
    pub fn new(weather: OpenMeteoClient, cache: ResponseCache, ttl: Duration) -> Self {
        Self {
            weather,
            cache,
            ttl,
        }
    }

    /// Compute (or serve from cache) the watering calculation.
    ///
    /// `plant_id` is the requested id after defaulting; an id outside the
    /// catalog resolves to the default profile but still keys the cache,
    /// so distinct requests stay distinct.
    pub async fn watering_calculation(
        &self,
        coords: Coordinates,
        plant_id: &str,
    ) -> AppResult<serde_json::Value> {
        let key = watering_key(coords, plant_id);
        if let Some(cached) = self.cache.get(&key, self.ttl).await {
            tracing::debug!("Serving watering calculation from cache: {}", key);
            return Ok(cached);
        }

        tracing::info!("Fetching fresh forecast from Open-Meteo for {:?}", coords);
        let weather = self.weather.fetch_forecast(coords.lat, coords.lon).await?;

        let plant = plant_or_default(plant_id);
        let estimate = estimate_watering(&weather.et0_mm, plant.coefficient, POT_DIAMETER_CM);

        let response = WateringResponse {
            required_ml: estimate.required_ml,
            current_temp: weather.current_temperature,
            current_humidity: weather.current_humidity,
            hourly_forecast: HourlyForecast {
                temperatures: weather.temperatures,
                humidity: weather.humidity,
                times: weather.times,
            },
            location: coords,
            pot_size: POT_DIAMETER_CM,
            plant: PlantSnapshot {
                plant_type: plant.id.to_string(),
                name: plant.name.to_string(),
                description: plant.description.to_string(),
                coefficient: plant.coefficient,
            },
            calculation: CalculationBreakdown {
                total_et0: estimate.total_et0_mm,
                etc_plant: estimate.etc_mm,
                surface_m2: estimate.surface_m2,
                required_litres: estimate.required_litres,
                plant_coefficient: plant.coefficient,
            },
        };

        let payload = serde_json::to_value(&response)
            .map_err(|e| AppError::Internal(format!("Failed to serialize response: {}", e)))?;
        self.cache.put(key, payload.clone()).await;

        Ok(payload)
    }
}
