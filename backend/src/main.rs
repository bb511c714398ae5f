//! Riego Backend Server
//!
//! Estimates how much water a potted plant needs today from live weather
//! data, and optionally identifies the plant species from a camera frame
//! via an image-classification service.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cache;
mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use cache::ResponseCache;
use external::{ApodClient, OpenMeteoClient, PowerClient};
use services::ClassifierGateway;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: ResponseCache,
    pub weather: OpenMeteoClient,
    pub apod: ApodClient,
    pub power: PowerClient,
    pub classifier: ClassifierGateway,
}

impl AppState {
    /// Build the shared state: one cache and one client per provider.
    fn from_config(config: Config) -> anyhow::Result<Self> {
        let weather = OpenMeteoClient::new(config.weather.base_url.clone());
        let apod = ApodClient::new(config.nasa.apod_url.clone(), config.nasa.api_key.clone());
        let power = PowerClient::new(config.nasa.power_url.clone());
        let classifier = ClassifierGateway::from_config(&config.vision)
            .map_err(|e| anyhow::anyhow!("Classifier configuration: {}", e))?;

        Ok(Self {
            config: Arc::new(config),
            cache: ResponseCache::new(),
            weather,
            apod,
            power,
            classifier,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riego_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Riego Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Classifier mode: {}", config.vision.mode);

    let port = config.server.port;
    let state = AppState::from_config(config)?;

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api", routes::api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Riego API v1.0"
}
