//! Temperature alert endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use riego_shared::resolve_coordinates;

use crate::error::AppResult;
use crate::services::TemperatureAlertService;
use crate::AppState;

/// Query parameters, lenient like the watering endpoint.
#[derive(Debug, Deserialize)]
pub struct TemperatureQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Flag cold snaps in the trailing 7-day temperature history.
pub async fn temperature_alert(
    State(state): State<AppState>,
    Query(query): Query<TemperatureQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let coords = resolve_coordinates(query.lat.as_deref(), query.lon.as_deref());

    let service = TemperatureAlertService::new(
        state.power.clone(),
        state.cache.clone(),
        state.config.cache.weather_ttl(),
    );
    let payload = service.temperature_alert(coords).await?;
    Ok(Json(payload))
}
