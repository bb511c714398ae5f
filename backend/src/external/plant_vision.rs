//! Plant vision classifier backends
//!
//! Two interchangeable backends produce the same ranked-prediction
//! response shape: a remote vision API called over HTTP with a bounded
//! timeout, and an in-process mock that always recognizes romero.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use riego_shared::{PLANT_CATALOG, DETECTION_FALLBACK_ID};

use crate::error::{AppError, AppResult};

/// One ranked prediction from the vision provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionPrediction {
    #[serde(rename = "class")]
    pub label: String,
    pub class_id: i32,
    pub confidence: f64,
}

/// Vision provider response shape (Roboflow-style).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(default)]
    pub predictions: Vec<VisionPrediction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl VisionResponse {
    /// Normalize to (label, confidence): the provider's own `top` field
    /// when present, otherwise the highest-ranked prediction, otherwise
    /// the fixed fallback label.
    pub fn top_prediction(&self) -> (String, f64) {
        if let Some(top) = &self.top {
            return (top.clone(), self.confidence.unwrap_or(0.0));
        }
        if let Some(first) = self.predictions.first() {
            return (first.label.clone(), first.confidence);
        }
        (DETECTION_FALLBACK_ID.to_string(), 0.0)
    }
}

/// Client for a remote vision classification API
#[derive(Clone)]
pub struct RemoteVisionClient {
    http_client: Client,
    classify_url: String,
    health_url: String,
    api_key: String,
}

impl RemoteVisionClient {
    /// Create a new remote vision client with a bounded request timeout.
    pub fn new(classify_url: String, health_url: String, api_key: String, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            classify_url,
            health_url,
            api_key,
        }
    }

    /// Send a base64 image for classification.
    pub async fn classify(&self, image_base64: &str) -> AppResult<VisionResponse> {
        let url = format!("{}?api_key={}", self.classify_url, self.api_key);

        let response = self
            .http_client
            .post(&url)
            .json(&json!({ "image": image_base64 }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout(format!("Vision API did not answer in time: {}", e))
                } else {
                    AppError::UpstreamUnavailable(format!("Vision API request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!(
                "Vision API error: {} - {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!("Failed to parse vision response: {}", e))
        })
    }

    /// Query the remote service's health endpoint.
    pub async fn health(&self) -> AppResult<serde_json::Value> {
        if self.health_url.is_empty() {
            return Err(AppError::Configuration(
                "Vision health endpoint not configured".to_string(),
            ));
        }

        let response = self
            .http_client
            .get(&self.health_url)
            .send()
            .await
            .map_err(|e| {
                AppError::UpstreamUnavailable(format!("Vision health request failed: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamUnavailable(format!(
                "Vision health error: {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!("Failed to parse vision health: {}", e))
        })
    }
}

/// In-process mock classifier.
///
/// Reproduces the shape of the remote provider's response. Like the
/// original mock service it always answers romero, which keeps fallback
/// behavior deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockVisionClient;

impl MockVisionClient {
    pub fn new() -> Self {
        Self
    }

    /// Classify an image. The payload is accepted and ignored.
    pub fn classify(&self) -> VisionResponse {
        VisionResponse {
            inference_id: Some(Uuid::new_v4().to_string()),
            time: Some(0.1),
            predictions: vec![VisionPrediction {
                label: "romero".to_string(),
                class_id: 1,
                confidence: 0.9796,
            }],
            top: Some("romero".to_string()),
            confidence: Some(0.9796),
        }
    }

    /// Health report for the in-process mock; always available.
    pub fn health(&self) -> serde_json::Value {
        let available: Vec<&str> = PLANT_CATALOG.iter().map(|p| p.id).collect();
        json!({
            "status": "OK",
            "service": "Plant Vision Mock",
            "available_plants": available,
        })
    }
}
