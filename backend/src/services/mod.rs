//! Business logic services for the riego backend

pub mod astronomy;
pub mod classifier;
pub mod irrigation;
pub mod temperature;

pub use astronomy::AstronomyService;
pub use classifier::{ClassifierGateway, ClassifierMode};
pub use irrigation::WateringService;
pub use temperature::TemperatureAlertService;
