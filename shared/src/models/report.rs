//! View-state handed to renderers

use serde::{Deserialize, Serialize};

use super::alert::{AlertNotice, AlertTier};
use super::forecast::ForecastEntry;
use super::weather::Reading;

/// Everything one render cycle needs: the reading, its alert and the outlook.
///
/// Built once by `report::compose` and never mutated; a new search produces a
/// new value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub reading: Reading,
    pub alert: AlertNotice,
    pub forecast: Vec<ForecastEntry>,
}

impl WeatherReport {
    pub fn tier(&self) -> AlertTier {
        self.alert.tier
    }
}
