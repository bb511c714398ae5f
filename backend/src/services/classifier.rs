//! Plant classifier gateway
//!
//! Routes classification requests to the mock or the remote backend
//! depending on the current mode, which is configurable at startup and
//! switchable at runtime through the admin endpoint. A remote failure is
//! rescued by the mock only when fallback is enabled.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use tokio::sync::RwLock;

use riego_shared::{ClassificationOutcome, ClassifierService};

use crate::config::VisionConfig;
use crate::error::{AppError, AppResult};
use crate::external::{MockVisionClient, RemoteVisionClient, VisionResponse};

/// Which backend answers classification requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierMode {
    Mock,
    Remote,
}

impl FromStr for ClassifierMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mock" => Ok(ClassifierMode::Mock),
            "remote" => Ok(ClassifierMode::Remote),
            other => Err(AppError::Validation(format!(
                "Invalid classifier mode '{}', expected 'mock' or 'remote'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ClassifierMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierMode::Mock => write!(f, "mock"),
            ClassifierMode::Remote => write!(f, "remote"),
        }
    }
}

/// Gateway configuration snapshot returned by the admin endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayStatus {
    pub mode: ClassifierMode,
    pub fallback_enabled: bool,
    pub remote_configured: bool,
    pub timeout_seconds: u64,
}

/// Classifier gateway shared across requests.
#[derive(Clone)]
pub struct ClassifierGateway {
    mode: Arc<RwLock<ClassifierMode>>,
    mock: MockVisionClient,
    remote: Option<RemoteVisionClient>,
    fallback_enabled: bool,
    timeout: Duration,
}

impl ClassifierGateway {
    /// Build the gateway from configuration.
    pub fn from_config(config: &VisionConfig) -> AppResult<Self> {
        let mode = config.mode.parse::<ClassifierMode>().map_err(|_| {
            AppError::Configuration(format!(
                "vision.mode must be 'mock' or 'remote', got '{}'",
                config.mode
            ))
        })?;

        let remote = if config.remote_url.is_empty() {
            None
        } else {
            Some(RemoteVisionClient::new(
                config.remote_url.clone(),
                config.remote_health_url.clone(),
                config.api_key.clone(),
                config.timeout(),
            ))
        };

        Ok(Self {
            mode: Arc::new(RwLock::new(mode)),
            mock: MockVisionClient::new(),
            remote,
            fallback_enabled: config.fallback_enabled,
            timeout: config.timeout(),
        })
    }

    pub async fn mode(&self) -> ClassifierMode {
        *self.mode.read().await
    }

    pub async fn set_mode(&self, mode: ClassifierMode) {
        tracing::info!("Switching classifier mode to {}", mode);
        *self.mode.write().await = mode;
    }

    pub async fn status(&self) -> GatewayStatus {
        GatewayStatus {
            mode: self.mode().await,
            fallback_enabled: self.fallback_enabled,
            remote_configured: self.remote.is_some(),
            timeout_seconds: self.timeout.as_secs(),
        }
    }

    /// Classify an image payload (data-URL or bare base64).
    pub async fn classify(&self, image: &str) -> AppResult<ClassificationOutcome> {
        match self.mode().await {
            ClassifierMode::Mock => Ok(self.classify_mock()),
            ClassifierMode::Remote => match self.classify_remote(image).await {
                Ok(response) => {
                    let (label, confidence) = response.top_prediction();
                    let raw = serde_json::to_value(&response).unwrap_or_default();
                    Ok(ClassificationOutcome::Classified {
                        label,
                        confidence,
                        raw,
                        service: ClassifierService::Remote,
                    })
                }
                Err(err) if self.fallback_enabled => {
                    tracing::warn!("Remote classifier failed, using mock fallback: {}", err);
                    Ok(self.fallback_outcome(err.to_string()))
                }
                Err(err) => Err(err),
            },
        }
    }

    /// Health of the backend selected by the current mode.
    pub async fn health(&self) -> AppResult<serde_json::Value> {
        match self.mode().await {
            ClassifierMode::Mock => Ok(self.mock.health()),
            ClassifierMode::Remote => match &self.remote {
                Some(remote) => remote.health().await,
                None => Err(AppError::Configuration(
                    "Remote classifier not configured".to_string(),
                )),
            },
        }
    }

    fn classify_mock(&self) -> ClassificationOutcome {
        let response = self.mock.classify();
        let (label, confidence) = response.top_prediction();
        let raw = serde_json::to_value(&response).unwrap_or_default();
        ClassificationOutcome::Classified {
            label,
            confidence,
            raw,
            service: ClassifierService::Mock,
        }
    }

    fn fallback_outcome(&self, reason: String) -> ClassificationOutcome {
        let response = self.mock.classify();
        let (label, confidence) = response.top_prediction();
        let raw = serde_json::to_value(&response).unwrap_or_default();
        ClassificationOutcome::Fallback {
            label,
            confidence,
            raw,
            service: ClassifierService::Mock,
            reason,
        }
    }

    async fn classify_remote(&self, image: &str) -> AppResult<VisionResponse> {
        let remote = self.remote.as_ref().ok_or_else(|| {
            AppError::Configuration("Remote classifier not configured".to_string())
        })?;
        let image_base64 = normalize_image_payload(image)?;
        remote.classify(&image_base64).await
    }
}

/// Strip a data-URL prefix and check the payload decodes as base64.
fn normalize_image_payload(image: &str) -> AppResult<String> {
    let encoded = match image.split_once("base64,") {
        Some((_, rest)) => rest,
        None => image,
    };

    BASE64
        .decode(encoded)
        .map_err(|e| AppError::Validation(format!("Image payload is not valid base64: {}", e)))?;

    Ok(encoded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(mode: &str, remote_url: &str, fallback_enabled: bool) -> ClassifierGateway {
        ClassifierGateway::from_config(&VisionConfig {
            mode: mode.to_string(),
            remote_url: remote_url.to_string(),
            remote_health_url: String::new(),
            api_key: "test-key".to_string(),
            fallback_enabled,
            timeout_seconds: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("mock".parse::<ClassifierMode>().unwrap(), ClassifierMode::Mock);
        assert_eq!("remote".parse::<ClassifierMode>().unwrap(), ClassifierMode::Remote);
        assert!("hybrid".parse::<ClassifierMode>().is_err());
        assert!("Mock".parse::<ClassifierMode>().is_err());
    }

    #[test]
    fn test_invalid_configured_mode_is_rejected() {
        let result = ClassifierGateway::from_config(&VisionConfig {
            mode: "auto".to_string(),
            remote_url: String::new(),
            remote_health_url: String::new(),
            api_key: String::new(),
            fallback_enabled: true,
            timeout_seconds: 10,
        });
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_normalize_strips_data_url_prefix() {
        let payload = normalize_image_payload("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!(payload, "aGVsbG8=");
    }

    #[test]
    fn test_normalize_accepts_bare_base64() {
        assert_eq!(normalize_image_payload("aGVsbG8=").unwrap(), "aGVsbG8=");
        assert_eq!(normalize_image_payload("").unwrap(), "");
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(matches!(
            normalize_image_payload("not//valid=base64!"),
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_mock_mode_classifies_without_network() {
        let gateway = gateway("mock", "", true);
        let outcome = gateway.classify("").await.unwrap();

        assert!(!outcome.used_fallback());
        assert_eq!(outcome.label(), "romero");
        assert_eq!(outcome.service(), ClassifierService::Mock);
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_to_mock() {
        // Port 9 is unroutable locally; the connection is refused at once.
        let gateway = gateway("remote", "http://127.0.0.1:9/classify", true);
        let outcome = gateway.classify("aGVsbG8=").await.unwrap();

        assert!(outcome.used_fallback());
        assert_eq!(outcome.label(), "romero");
        assert_eq!(outcome.confidence(), 0.9796);
        assert_eq!(outcome.service(), ClassifierService::Mock);
    }

    #[tokio::test]
    async fn test_remote_failure_propagates_without_fallback() {
        let gateway = gateway("remote", "http://127.0.0.1:9/classify", false);
        let result = gateway.classify("aGVsbG8=").await;

        assert!(matches!(result, Err(AppError::UpstreamUnavailable(_))));
    }

    #[tokio::test]
    async fn test_unconfigured_remote_is_eligible_for_fallback() {
        let gateway = gateway("remote", "", true);
        let outcome = gateway.classify("aGVsbG8=").await.unwrap();

        assert!(outcome.used_fallback());
        assert_eq!(outcome.label(), "romero");
    }

    #[tokio::test]
    async fn test_mode_switch_is_observable() {
        let gateway = gateway("mock", "", true);
        assert_eq!(gateway.mode().await, ClassifierMode::Mock);

        gateway.set_mode(ClassifierMode::Remote).await;
        assert_eq!(gateway.mode().await, ClassifierMode::Remote);

        let status = gateway.status().await;
        assert_eq!(status.mode, ClassifierMode::Remote);
        assert!(!status.remote_configured);
        assert!(status.fallback_enabled);
    }
}
