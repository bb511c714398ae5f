//! Configuration management for the riego backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with RIEGO_ prefix

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Open-Meteo forecast API configuration
    pub weather: WeatherConfig,

    /// NASA APIs (APOD and POWER) configuration
    pub nasa: NasaConfig,

    /// Plant vision classifier configuration
    pub vision: VisionConfig,

    /// Response cache TTLs
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Open-Meteo base URL
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NasaConfig {
    /// NASA API key, DEMO_KEY works with low rate limits
    pub api_key: String,

    /// Astronomy Picture of the Day endpoint
    pub apod_url: String,

    /// POWER daily-point endpoint
    pub power_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VisionConfig {
    /// Initial classifier mode: "mock" or "remote"
    pub mode: String,

    /// Remote classifier endpoint, empty when not configured
    pub remote_url: String,

    /// Remote classifier health endpoint, empty when not configured
    pub remote_health_url: String,

    /// Remote classifier API key
    pub api_key: String,

    /// Fall back to the mock classifier when the remote one fails
    pub fallback_enabled: bool,

    /// Bounded wait on the remote call, in seconds
    pub timeout_seconds: u64,
}

impl VisionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// TTL for weather and plant data entries, in seconds
    pub weather_ttl_seconds: u64,

    /// TTL for the astronomy picture entry, in seconds
    pub apod_ttl_seconds: u64,
}

impl CacheConfig {
    pub fn weather_ttl(&self) -> Duration {
        Duration::from_secs(self.weather_ttl_seconds)
    }

    pub fn apod_ttl(&self) -> Duration {
        Duration::from_secs(self.apod_ttl_seconds)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("RIEGO_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3001)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.base_url", "https://api.open-meteo.com")?
            .set_default("nasa.api_key", "DEMO_KEY")?
            .set_default("nasa.apod_url", "https://api.nasa.gov/planetary/apod")?
            .set_default(
                "nasa.power_url",
                "https://power.larc.nasa.gov/api/temporal/daily/point",
            )?
            .set_default("vision.mode", "mock")?
            .set_default("vision.remote_url", "")?
            .set_default("vision.remote_health_url", "")?
            .set_default("vision.api_key", "")?
            .set_default("vision.fallback_enabled", true)?
            .set_default("vision.timeout_seconds", 10)?
            .set_default("cache.weather_ttl_seconds", 600)?
            .set_default("cache.apod_ttl_seconds", 86400)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (RIEGO_ prefix)
            .add_source(
                Environment::with_prefix("RIEGO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
