//! Common types used across the backend

use serde::{Deserialize, Serialize};

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when both components are inside the valid WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Relative water demand derived from a plant's crop coefficient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WaterNeed {
    High,
    Medium,
    Low,
}

impl WaterNeed {
    /// High above Kc 1.0, medium above 0.8, low otherwise.
    pub fn from_coefficient(kc: f64) -> Self {
        if kc > 1.0 {
            WaterNeed::High
        } else if kc > 0.8 {
            WaterNeed::Medium
        } else {
            WaterNeed::Low
        }
    }
}

impl std::fmt::Display for WaterNeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaterNeed::High => write!(f, "high"),
            WaterNeed::Medium => write!(f, "medium"),
            WaterNeed::Low => write!(f, "low"),
        }
    }
}
