//! Static plant catalog with crop coefficients

use serde::Serialize;

use crate::types::WaterNeed;

/// A plant species the system knows how to water.
///
/// The catalog is fixed at compile time and never mutated; profiles are
/// handed out as `&'static` references.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PlantProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Crop coefficient Kc, the unitless multiplier applied to reference
    /// evapotranspiration.
    pub coefficient: f64,
}

impl PlantProfile {
    pub fn water_need(&self) -> WaterNeed {
        WaterNeed::from_coefficient(self.coefficient)
    }
}

/// All plants the catalog knows about.
pub const PLANT_CATALOG: &[PlantProfile] = &[
    PlantProfile {
        id: "menta",
        name: "🌿 Menta",
        description: "Necesita mucha agua, hojas jugosas",
        coefficient: 1.2,
    },
    PlantProfile {
        id: "romero",
        name: "🌱 Romero",
        description: "Resistente a sequía, aromática mediterránea",
        coefficient: 0.6,
    },
];

/// Plant used when the watering endpoint receives an unknown id.
pub const DEFAULT_PLANT_ID: &str = "menta";

/// Plant used when the classifier detects a species outside the catalog.
pub const DETECTION_FALLBACK_ID: &str = "romero";

/// Look up a plant by its catalog id.
pub fn find_plant(id: &str) -> Option<&'static PlantProfile> {
    PLANT_CATALOG.iter().find(|p| p.id == id)
}

/// Look up a plant, falling back to the default profile for unknown ids.
pub fn plant_or_default(id: &str) -> &'static PlantProfile {
    find_plant(id).unwrap_or_else(default_plant)
}

pub fn default_plant() -> &'static PlantProfile {
    find_plant(DEFAULT_PLANT_ID).expect("default plant is in the catalog")
}

pub fn detection_fallback_plant() -> &'static PlantProfile {
    find_plant(DETECTION_FALLBACK_ID).expect("fallback plant is in the catalog")
}

/// Coerce a detected label to a catalog id, using the detection fallback
/// for anything the catalog does not know.
pub fn coerce_detected_label(label: &str) -> &'static PlantProfile {
    find_plant(label).unwrap_or_else(detection_fallback_plant)
}
