//! HTTP handlers for the riego backend

pub mod astronomy;
pub mod classify;
pub mod health;
pub mod plants;
pub mod temperature;
pub mod watering;

pub use astronomy::*;
pub use classify::*;
pub use health::*;
pub use plants::*;
pub use temperature::*;
pub use watering::*;
