//! Watering calculation endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use riego_shared::{resolve_coordinates, DEFAULT_PLANT_ID};

use crate::error::AppResult;
use crate::services::WateringService;
use crate::AppState;

/// Query parameters for the watering calculation.
///
/// Kept as raw strings so that unparseable values default silently
/// instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct WateringQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub plant: Option<String>,
}

/// Compute the water volume a pot needs over the next 24 hours.
pub async fn watering_calculation(
    State(state): State<AppState>,
    Query(query): Query<WateringQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let coords = resolve_coordinates(query.lat.as_deref(), query.lon.as_deref());
    let plant_id = query.plant.as_deref().unwrap_or(DEFAULT_PLANT_ID);

    let service = WateringService::new(
        state.weather.clone(),
        state.cache.clone(),
        state.config.cache.weather_ttl(),
    );
    let payload = service.watering_calculation(coords, plant_id).await?;
    Ok(Json(payload))
}
