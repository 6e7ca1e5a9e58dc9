//! Weather reading models

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::alert::AlertTier;

/// Sky and precipitation descriptors a reading can carry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SkyCondition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    #[serde(rename = "Light Rain")]
    LightRain,
    #[serde(rename = "Heavy Rain")]
    HeavyRain,
    Thunderstorm,
    Overcast,
    Drizzle,
    #[serde(rename = "Scattered Showers")]
    ScatteredShowers,
}

impl SkyCondition {
    /// Every condition, in display order
    pub const ALL: [SkyCondition; 9] = [
        SkyCondition::Sunny,
        SkyCondition::PartlyCloudy,
        SkyCondition::Cloudy,
        SkyCondition::LightRain,
        SkyCondition::HeavyRain,
        SkyCondition::Thunderstorm,
        SkyCondition::Overcast,
        SkyCondition::Drizzle,
        SkyCondition::ScatteredShowers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkyCondition::Sunny => "Sunny",
            SkyCondition::PartlyCloudy => "Partly Cloudy",
            SkyCondition::Cloudy => "Cloudy",
            SkyCondition::LightRain => "Light Rain",
            SkyCondition::HeavyRain => "Heavy Rain",
            SkyCondition::Thunderstorm => "Thunderstorm",
            SkyCondition::Overcast => "Overcast",
            SkyCondition::Drizzle => "Drizzle",
            SkyCondition::ScatteredShowers => "Scattered Showers",
        }
    }

    pub fn icon(&self) -> WeatherIcon {
        WeatherIcon::for_condition(self.label())
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Distribution<SkyCondition> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SkyCondition {
        SkyCondition::ALL[rng.gen_range(0..SkyCondition::ALL.len())]
    }
}

/// One synthesized snapshot of weather values for a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub location: String,
    pub condition: SkyCondition,
    pub temperature_c: i32,
    pub rainfall_mm: i32,
    pub humidity_pct: i32,
    pub wind_speed_kph: i32,
    pub feels_like_c: i32,
}

impl Reading {
    /// Flood alert tier for this reading (rainfall and condition only)
    pub fn alert_tier(&self) -> AlertTier {
        crate::classifier::classify(self.rainfall_mm, self.condition.label())
    }

    pub fn feels_like_offset(&self) -> i32 {
        self.feels_like_c - self.temperature_c
    }

    pub fn icon(&self) -> WeatherIcon {
        self.condition.icon()
    }
}

/// Icon family shown next to a condition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    Sun,
    CloudRain,
    Cloud,
}

impl WeatherIcon {
    /// Pick an icon from a free-text condition label.
    ///
    /// Keywords are matched case-sensitively. Anything unrecognized falls back
    /// to `Sun`.
    pub fn for_condition(condition: &str) -> Self {
        if condition.contains("Sunny") {
            WeatherIcon::Sun
        } else if ["Rain", "Storm", "Drizzle", "Showers"]
            .iter()
            .any(|word| condition.contains(word))
        {
            WeatherIcon::CloudRain
        } else if condition.contains("Cloud") {
            WeatherIcon::Cloud
        } else {
            WeatherIcon::Sun
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeatherIcon::Sun => "sun",
            WeatherIcon::CloudRain => "cloud_rain",
            WeatherIcon::Cloud => "cloud",
        }
    }
}
