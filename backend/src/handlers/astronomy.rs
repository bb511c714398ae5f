//! Astronomy picture of the day endpoint

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::AstronomyService;
use crate::AppState;

/// Serve the (cached) astronomy picture of the day metadata.
pub async fn get_apod(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let service = AstronomyService::new(
        state.apod.clone(),
        state.cache.clone(),
        state.config.cache.apod_ttl(),
    );
    let payload = service.picture_of_the_day().await?;
    Ok(Json(payload))
}
