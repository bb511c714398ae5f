//! External API integrations

pub mod nasa;
pub mod open_meteo;
pub mod plant_vision;

pub use nasa::{ApodClient, PowerClient};
pub use open_meteo::OpenMeteoClient;
pub use plant_vision::{MockVisionClient, RemoteVisionClient, VisionResponse};
