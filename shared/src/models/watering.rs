//! Wire models for the watering calculation endpoint
//!
//! Field names are camelCase to stay compatible with the existing client.

use serde::{Deserialize, Serialize};

use crate::types::Coordinates;

/// Full watering calculation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WateringResponse {
    pub required_ml: i64,
    pub current_temp: f64,
    pub current_humidity: f64,
    pub hourly_forecast: HourlyForecast,
    pub location: Coordinates,
    pub pot_size: f64,
    pub plant: PlantSnapshot,
    pub calculation: CalculationBreakdown,
}

/// 24-hour forecast window echoed back to the client.
///
/// All three series are aligned by index: entry i of each refers to the
/// same hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub temperatures: Vec<f64>,
    pub humidity: Vec<f64>,
    pub times: Vec<String>,
}

/// Snapshot of the plant profile used for the calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantSnapshot {
    #[serde(rename = "type")]
    pub plant_type: String,
    pub name: String,
    pub description: String,
    pub coefficient: f64,
}

/// Intermediate values of the irrigation calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationBreakdown {
    #[serde(rename = "totalET0")]
    pub total_et0: f64,
    #[serde(rename = "etcPlant")]
    pub etc_plant: f64,
    #[serde(rename = "surfaceM2")]
    pub surface_m2: f64,
    #[serde(rename = "requiredLitres")]
    pub required_litres: f64,
    #[serde(rename = "plantCoefficient")]
    pub plant_coefficient: f64,
}
