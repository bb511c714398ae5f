//! Classification outcome models

use serde::Serialize;

/// Which classifier backend produced a result.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierService {
    Mock,
    Remote,
}

impl std::fmt::Display for ClassifierService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierService::Mock => write!(f, "mock"),
            ClassifierService::Remote => write!(f, "remote"),
        }
    }
}

/// Outcome of a classification request.
///
/// A remote failure that was rescued by the mock is a distinct variant
/// rather than an optional flag, so callers cannot forget to check it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClassificationOutcome {
    /// The selected backend answered normally.
    Classified {
        label: String,
        confidence: f64,
        raw: serde_json::Value,
        service: ClassifierService,
    },
    /// The remote backend failed and the mock answered in its place.
    Fallback {
        label: String,
        confidence: f64,
        raw: serde_json::Value,
        service: ClassifierService,
        reason: String,
    },
}

impl ClassificationOutcome {
    pub fn label(&self) -> &str {
        match self {
            ClassificationOutcome::Classified { label, .. } => label,
            ClassificationOutcome::Fallback { label, .. } => label,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            ClassificationOutcome::Classified { confidence, .. } => *confidence,
            ClassificationOutcome::Fallback { confidence, .. } => *confidence,
        }
    }

    pub fn raw(&self) -> &serde_json::Value {
        match self {
            ClassificationOutcome::Classified { raw, .. } => raw,
            ClassificationOutcome::Fallback { raw, .. } => raw,
        }
    }

    pub fn service(&self) -> ClassifierService {
        match self {
            ClassificationOutcome::Classified { service, .. } => *service,
            ClassificationOutcome::Fallback { service, .. } => *service,
        }
    }

    pub fn used_fallback(&self) -> bool {
        matches!(self, ClassificationOutcome::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_tagged() {
        let outcome = ClassificationOutcome::Fallback {
            label: "romero".to_string(),
            confidence: 0.9796,
            raw: serde_json::json!({}),
            service: ClassifierService::Mock,
            reason: "connection refused".to_string(),
        };

        assert!(outcome.used_fallback());
        assert_eq!(outcome.label(), "romero");

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "fallback");
        assert_eq!(json["service"], "mock");
    }

    #[test]
    fn test_classified_is_not_fallback() {
        let outcome = ClassificationOutcome::Classified {
            label: "menta".to_string(),
            confidence: 0.9542,
            raw: serde_json::json!({}),
            service: ClassifierService::Remote,
        };

        assert!(!outcome.used_fallback());
        assert_eq!(outcome.service(), ClassifierService::Remote);
    }
}
