//! Route definitions for the Flood & Weather Alert server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Synthetic weather reports
        .route("/weather", get(handlers::get_weather))
        .route(
            "/weather/current-location",
            get(handlers::get_current_location_weather),
        )
        .route("/forecast", post(handlers::project_forecast))
        .route("/locations", get(handlers::list_locations))
        // Flood alert tiers
        .nest("/alerts", alert_routes())
        // Alert sign-up (acknowledged locally, never delivered)
        .route("/subscriptions", post(handlers::create_subscription))
}

/// Alert classification routes
fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/classify", get(handlers::classify_alert))
        .route("/tiers", get(handlers::list_alert_tiers))
}
