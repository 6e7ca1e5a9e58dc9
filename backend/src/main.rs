//! Route 360 Flood & Weather Alert System - Server
//!
//! Simulated weather and flood alerts for Ghanaian cities and towns.

use flood_alert_backend::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "flood_alert_server=debug,flood_alert_backend=debug,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Flood & Weather Alert Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        search_delay_ms = config.simulation.search_delay_ms,
        locate_delay_ms = config.simulation.locate_delay_ms,
        seeded = config.simulation.rng_seed.is_some(),
        "Weather simulation configured"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Build application
    let app = create_app(AppState::new(config));

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
