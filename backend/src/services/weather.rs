//! Weather service: synthetic reports behind a simulated network delay

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shared::{compose, normalize_location, project, ForecastEntry, Reading, WeatherReport};

use crate::config::SimulationConfig;
use crate::error::{AppError, AppResult};

/// Weather service for producing synthetic reports
#[derive(Clone)]
pub struct WeatherService {
    rng: Arc<Mutex<ChaCha8Rng>>,
    search_delay: Duration,
    locate_delay: Duration,
}

impl WeatherService {
    /// Create a new WeatherService from the simulation settings
    pub fn new(config: &SimulationConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(rng, config.search_delay(), config.locate_delay())
    }

    /// Create a new WeatherService around an existing generator
    pub fn with_rng(rng: ChaCha8Rng, search_delay: Duration, locate_delay: Duration) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
            search_delay,
            locate_delay,
        }
    }

    /// Report for a typed location; blank input picks a random place
    pub async fn search(&self, location: Option<&str>) -> AppResult<WeatherReport> {
        simulate_latency(self.search_delay).await;

        let location = location.and_then(normalize_location);
        let report = self.generate(|rng| compose(rng, location))?;

        tracing::info!(
            location = %report.reading.location,
            tier = %report.tier(),
            "Generated weather report"
        );
        Ok(report)
    }

    /// Report for the caller's position once they allowed location access.
    ///
    /// There is no positioning; a random gazetteer place stands in for it.
    pub async fn current_location(&self) -> AppResult<WeatherReport> {
        simulate_latency(self.locate_delay).await;

        let report = self.generate(|rng| compose(rng, None))?;

        tracing::info!(
            location = %report.reading.location,
            tier = %report.tier(),
            "Generated current-location weather report"
        );
        Ok(report)
    }

    /// Project the outlook for a reading supplied by the client
    pub fn forecast(&self, reading: &Reading) -> AppResult<Vec<ForecastEntry>> {
        let forecast = self.generate(|rng| project(rng, reading))?;
        tracing::debug!(location = %reading.location, "Projected forecast");
        Ok(forecast)
    }

    fn generate<T>(&self, f: impl FnOnce(&mut ChaCha8Rng) -> T) -> AppResult<T> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::Internal("Weather generator lock poisoned".to_string()))?;
        Ok(f(&mut rng))
    }
}

/// Stand-in for network latency. Dropping the future cancels the wait.
async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
