//! Shared types and domain logic for the riego irrigation backend
//!
//! This crate contains everything that does not need an async runtime:
//! the plant catalog, the irrigation calculation, and request validation
//! helpers used by the backend.

pub mod irrigation;
pub mod models;
pub mod types;
pub mod validation;

pub use irrigation::*;
pub use models::*;
pub use types::*;
pub use validation::*;
