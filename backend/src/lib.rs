//! Route 360 Flood & Weather Alert System - HTTP shell
//!
//! Serves synthetic weather reports, flood alert tiers and a local
//! acknowledgment for alert sign-ups to the browser front end.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use services::{SubscriptionService, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
    pub subscriptions: SubscriptionService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            weather: WeatherService::new(&config.simulation),
            subscriptions: SubscriptionService::new(&config.subscription),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Route 360 Flood & Weather Alert API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
