//! Route definitions for the riego backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Watering calculation and plant catalog
        .route("/watering-calculation", get(handlers::watering_calculation))
        .route("/plants", get(handlers::list_plants))
        // Plant classification
        .route("/classify-plant", post(handlers::classify_plant))
        .route("/plant-status", get(handlers::plant_status))
        .route("/ai-mode", post(handlers::set_ai_mode))
        .route("/ai-status", get(handlers::ai_status))
        // Astronomy picture of the day
        .route("/apod", get(handlers::get_apod))
        // Cold-snap alerts
        .route("/temperature-alert", get(handlers::temperature_alert))
        // Health check
        .route("/health", get(handlers::health_check))
}
