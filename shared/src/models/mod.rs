//! Domain models for the riego irrigation backend

mod classification;
mod plant;
mod temperature;
mod watering;

pub use classification::*;
pub use plant::*;
pub use temperature::*;
pub use watering::*;
