//! Configuration management for the Flood & Weather Alert server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with FLOOD_ prefix

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Log output configuration
    pub logging: LoggingConfig,

    /// Synthetic weather configuration
    pub simulation: SimulationConfig,

    /// Alert sign-up configuration
    pub subscription: SubscriptionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    /// Artificial latency before a searched report is returned
    pub search_delay_ms: u64,

    /// Artificial latency before a current-location report is returned
    pub locate_delay_ms: u64,

    /// Fixed generator seed; entropy-seeded when absent
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SubscriptionConfig {
    /// Seconds the client keeps the confirmation banner visible
    pub confirmation_display_secs: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FLOOD_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("logging.json", false)?
            .set_default("simulation.search_delay_ms", 1000)?
            .set_default("simulation.locate_delay_ms", 1500)?
            .set_default("subscription.confirmation_display_secs", 3)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FLOOD_ prefix)
            .add_source(
                Environment::with_prefix("FLOOD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl SimulationConfig {
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn locate_delay(&self) -> Duration {
        Duration::from_millis(self.locate_delay_ms)
    }

    /// No artificial latency, for tests and scripted clients
    pub fn instant(rng_seed: Option<u64>) -> Self {
        Self {
            search_delay_ms: 0,
            locate_delay_ms: 0,
            rng_seed,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            search_delay_ms: 1000,
            locate_delay_ms: 1500,
            rng_seed: None,
        }
    }
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            confirmation_display_secs: shared::DEFAULT_CONFIRMATION_DISPLAY_SECS,
        }
    }
}
