//! Plant classification endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use riego_shared::{
    coerce_detected_label, detection_fallback_plant, ClassifierService, PlantProfile,
    PLANT_CATALOG,
};

use crate::error::AppResult;
use crate::services::ClassifierMode;
use crate::AppState;

/// Classification request body; the image is a data-URL or bare base64.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub image: Option<String>,
}

/// Successful classification response.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub detected: String,
    pub confidence: f64,
    pub plant_used: &'static str,
    pub plant_info: PlantProfile,
    pub ai_response: serde_json::Value,
    pub service_used: ClassifierService,
    pub used_fallback: bool,
    pub timestamp: DateTime<Utc>,
}

/// Classify a camera frame into a catalog plant.
///
/// An unrescued classifier failure answers 500 with a structured
/// fallback object describing the default detection plant, so the client
/// can always keep going.
pub async fn classify_plant(
    State(state): State<AppState>,
    Json(input): Json<ClassifyRequest>,
) -> Response {
    let image = input.image.as_deref().unwrap_or("");

    match state.classifier.classify(image).await {
        Ok(outcome) => {
            let plant = coerce_detected_label(outcome.label());
            if plant.id != outcome.label() {
                tracing::warn!(
                    "Detected plant '{}' is not in the catalog, using {}",
                    outcome.label(),
                    plant.id
                );
            }
            tracing::info!(
                "Classified plant: {} ({:.1}%) -> using {}",
                outcome.label(),
                outcome.confidence() * 100.0,
                plant.id
            );

            Json(ClassifyResponse {
                detected: outcome.label().to_string(),
                confidence: outcome.confidence(),
                plant_used: plant.id,
                plant_info: *plant,
                ai_response: outcome.raw().clone(),
                service_used: outcome.service(),
                used_fallback: outcome.used_fallback(),
                timestamp: Utc::now(),
            })
            .into_response()
        }
        Err(err) => {
            tracing::error!("Plant classification failed: {}", err);
            let fallback = detection_fallback_plant();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Error al clasificar la planta",
                    "fallback": {
                        "detected": fallback.id,
                        "confidence": 0.5,
                        "plant_used": fallback.id,
                        "plant_info": fallback,
                    },
                })),
            )
                .into_response()
        }
    }
}

/// Vision-service health passthrough.
///
/// Always answers 200; an unreachable service is reported in the body
/// rather than as an HTTP error.
pub async fn plant_status(State(state): State<AppState>) -> Json<serde_json::Value> {
    let backend_plants: Vec<&str> = PLANT_CATALOG.iter().map(|p| p.id).collect();

    match state.classifier.health().await {
        Ok(health) => Json(json!({
            "vision_service": health,
            "backend_plants": backend_plants,
            "status": "connected",
        })),
        Err(err) => {
            tracing::error!("Vision service health check failed: {}", err);
            Json(json!({
                "vision_service": null,
                "backend_plants": backend_plants,
                "status": "disconnected",
                "error": "Plant Vision service no disponible",
            }))
        }
    }
}

/// Admin request to switch the classifier mode.
#[derive(Debug, Deserialize)]
pub struct AiModeRequest {
    pub mode: String,
}

/// Switch the classifier gateway between mock and remote.
pub async fn set_ai_mode(
    State(state): State<AppState>,
    Json(input): Json<AiModeRequest>,
) -> AppResult<Json<crate::services::classifier::GatewayStatus>> {
    let mode: ClassifierMode = input.mode.parse()?;
    state.classifier.set_mode(mode).await;
    Ok(Json(state.classifier.status().await))
}

/// Current classifier gateway configuration.
pub async fn ai_status(
    State(state): State<AppState>,
) -> Json<crate::services::classifier::GatewayStatus> {
    Json(state.classifier.status().await)
}
