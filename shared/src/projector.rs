//! Five-day outlook projection

use rand::Rng;

use crate::models::{DayLabel, ForecastEntry, Reading};
use crate::types::TEMPERATURE_RANGE_C;

/// Number of entries in every outlook
pub const FORECAST_DAYS: usize = DayLabel::ALL.len();

/// Project the outlook for `current`.
///
/// Today repeats the current condition and temperature. Each later day gets a
/// freshly drawn condition and temperature, independent of `current` and of
/// each other.
pub fn project<R: Rng + ?Sized>(rng: &mut R, current: &Reading) -> Vec<ForecastEntry> {
    DayLabel::ALL
        .into_iter()
        .map(|day_label| match day_label {
            DayLabel::Today => {
                ForecastEntry::new(day_label, current.condition, current.temperature_c)
            }
            _ => {
                let condition = rng.gen();
                ForecastEntry::new(day_label, condition, rng.gen_range(TEMPERATURE_RANGE_C))
            }
        })
        .collect()
}
