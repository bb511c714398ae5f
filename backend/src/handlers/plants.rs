//! Plant catalog endpoint

use axum::Json;
use serde::Serialize;

use riego_shared::{WaterNeed, PLANT_CATALOG};

/// One catalog entry with its derived water-need label.
#[derive(Debug, Serialize)]
pub struct PlantListEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub coefficient: f64,
    #[serde(rename = "waterNeed")]
    pub water_need: WaterNeed,
}

#[derive(Debug, Serialize)]
pub struct PlantListResponse {
    pub plants: Vec<PlantListEntry>,
}

/// List the plants the system can water.
pub async fn list_plants() -> Json<PlantListResponse> {
    let plants = PLANT_CATALOG
        .iter()
        .map(|p| PlantListEntry {
            id: p.id,
            name: p.name,
            description: p.description,
            coefficient: p.coefficient,
            water_need: p.water_need(),
        })
        .collect();

    Json(PlantListResponse { plants })
}
