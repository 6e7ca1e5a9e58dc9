//! Flood alert classification

use crate::models::AlertTier;

/// Rainfall above which the alert is at least an emergency, mm
pub const EMERGENCY_RAINFALL_MM: i32 = 80;

/// Rainfall above which the alert is at least a warning, mm
pub const WARNING_RAINFALL_MM: i32 = 50;

/// Rainfall above which the alert is at least a watch, mm
pub const WATCH_RAINFALL_MM: i32 = 20;

/// Classify flood risk from rainfall and a condition label.
///
/// Tiers are checked from most to least severe and the first match wins. At
/// each tier the rainfall threshold and the condition keywords are OR-ed, so
/// either signal alone is enough. Condition labels are matched by substring;
/// a label with no keyword leaves only the rainfall checks.
pub fn classify(rainfall_mm: i32, condition: &str) -> AlertTier {
    if rainfall_mm > EMERGENCY_RAINFALL_MM
        || condition.contains("Heavy Rain")
        || condition.contains("Thunderstorm")
    {
        AlertTier::Emergency
    } else if rainfall_mm > WARNING_RAINFALL_MM || condition.contains("Rain") {
        AlertTier::Warning
    } else if rainfall_mm > WATCH_RAINFALL_MM
        || condition.contains("Drizzle")
        || condition.contains("Showers")
    {
        AlertTier::Watch
    } else {
        AlertTier::Normal
    }
}
