//! Five-day outlook models

use serde::{Deserialize, Serialize};

use super::weather::{SkyCondition, WeatherIcon};

/// Day slots of the outlook, in the order they are shown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DayLabel {
    Today,
    Tomorrow,
    #[serde(rename = "Day 3")]
    Day3,
    #[serde(rename = "Day 4")]
    Day4,
    #[serde(rename = "Day 5")]
    Day5,
}

impl DayLabel {
    pub const ALL: [DayLabel; 5] = [
        DayLabel::Today,
        DayLabel::Tomorrow,
        DayLabel::Day3,
        DayLabel::Day4,
        DayLabel::Day5,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DayLabel::Today => "Today",
            DayLabel::Tomorrow => "Tomorrow",
            DayLabel::Day3 => "Day 3",
            DayLabel::Day4 => "Day 4",
            DayLabel::Day5 => "Day 5",
        }
    }
}

impl std::fmt::Display for DayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One day's projected condition and temperature, with the icon to show
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEntry {
    pub day_label: DayLabel,
    pub condition: SkyCondition,
    pub temperature_c: i32,
    pub icon: WeatherIcon,
}

impl ForecastEntry {
    pub fn new(day_label: DayLabel, condition: SkyCondition, temperature_c: i32) -> Self {
        Self {
            day_label,
            condition,
            temperature_c,
            icon: condition.icon(),
        }
    }
}
