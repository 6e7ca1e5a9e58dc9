//! Property tests for the weather core
//!
//! - Sampled readings stay inside their ranges
//! - Alert classification is monotonic and OR-combined
//! - Outlooks always have five entries anchored on the current reading

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shared::*;

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// 10,000 readings from one generator all stay in range
    #[test]
    fn test_ten_thousand_samples_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..10_000 {
            let reading = sample(&mut rng, None);
            assert!(TEMPERATURE_RANGE_C.contains(&reading.temperature_c));
            assert!(RAINFALL_RANGE_MM.contains(&reading.rainfall_mm));
            assert!(HUMIDITY_RANGE_PCT.contains(&reading.humidity_pct));
            assert!(WIND_SPEED_RANGE_KPH.contains(&reading.wind_speed_kph));
            assert!(FEELS_LIKE_OFFSET_RANGE_C.contains(&reading.feels_like_offset()));
            assert!(is_known_location(&reading.location));
        }
    }

    /// Both ends of every range are reachable
    #[test]
    fn test_range_bounds_are_reached() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let readings: Vec<Reading> = (0..20_000).map(|_| sample(&mut rng, None)).collect();

        let offsets: Vec<i32> = readings.iter().map(Reading::feels_like_offset).collect();
        assert_eq!(offsets.iter().min(), Some(&-3));
        assert_eq!(offsets.iter().max(), Some(&2));

        let temps: Vec<i32> = readings.iter().map(|r| r.temperature_c).collect();
        assert_eq!(temps.iter().min(), Some(&20));
        assert_eq!(temps.iter().max(), Some(&35));

        let rain: Vec<i32> = readings.iter().map(|r| r.rainfall_mm).collect();
        assert_eq!(rain.iter().min(), Some(&0));
        assert_eq!(rain.iter().max(), Some(&100));
    }

    /// Every condition shows up in a large sample
    #[test]
    fn test_all_conditions_sampled() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let seen: std::collections::HashSet<SkyCondition> =
            (0..2_000).map(|_| sample(&mut rng, None).condition).collect();
        assert_eq!(seen.len(), SkyCondition::ALL.len());
    }

    /// Spot checks of the classification table
    #[test]
    fn test_classification_table() {
        let cases = [
            (81, "Sunny", AlertTier::Emergency),
            (0, "Thunderstorm", AlertTier::Emergency),
            (60, "Sunny", AlertTier::Warning),
            (0, "Light Rain", AlertTier::Warning),
            (25, "Sunny", AlertTier::Watch),
            (0, "Drizzle", AlertTier::Watch),
            (10, "Sunny", AlertTier::Normal),
        ];
        for (rainfall, condition, expected) in cases {
            assert_eq!(classify(rainfall, condition), expected, "{rainfall} {condition}");
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn rainfall_strategy() -> impl Strategy<Value = i32> {
    0i32..=100
}

fn condition_strategy() -> impl Strategy<Value = SkyCondition> {
    prop::sample::select(SkyCondition::ALL.to_vec())
}

fn location_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][A-Za-z '-]{0,30}",
        "[ \t]{1,8}",
        " [A-Za-z]{1,10} ",
    ]
}

proptest! {
    /// Any seed yields an in-range reading
    #[test]
    fn prop_sample_in_range(seed in any::<u64>()) {
        let reading = sample(&mut ChaCha8Rng::seed_from_u64(seed), None);
        prop_assert!(TEMPERATURE_RANGE_C.contains(&reading.temperature_c));
        prop_assert!(RAINFALL_RANGE_MM.contains(&reading.rainfall_mm));
        prop_assert!(HUMIDITY_RANGE_PCT.contains(&reading.humidity_pct));
        prop_assert!(WIND_SPEED_RANGE_KPH.contains(&reading.wind_speed_kph));
        prop_assert!(FEELS_LIKE_OFFSET_RANGE_C.contains(&reading.feels_like_offset()));
    }

    /// Any non-empty location is kept exactly as given, whitespace included
    #[test]
    fn prop_location_passthrough(seed in any::<u64>(), location in location_strategy()) {
        let reading = sample(&mut ChaCha8Rng::seed_from_u64(seed), Some(&location));
        prop_assert_eq!(reading.location, location);
    }

    /// Classification only ever rises with rainfall for a fixed condition
    #[test]
    fn prop_classification_monotonic_in_rainfall(
        low in rainfall_strategy(),
        high in rainfall_strategy(),
        condition in condition_strategy()
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        prop_assert!(classify(low, condition.label()) <= classify(high, condition.label()));
    }

    /// A condition keyword sets a floor on the tier regardless of rainfall
    #[test]
    fn prop_condition_floor(rainfall in rainfall_strategy(), condition in condition_strategy()) {
        let tier = classify(rainfall, condition.label());
        let floor = classify(0, condition.label());
        prop_assert!(tier >= floor);
        prop_assert!(tier >= classify(rainfall, "Sunny"));
    }

    /// Classification equals the stronger of the two signals on their own
    #[test]
    fn prop_classification_is_max_of_signals(
        rainfall in rainfall_strategy(),
        condition in condition_strategy()
    ) {
        let by_rain = classify(rainfall, "");
        let by_condition = classify(0, condition.label());
        prop_assert_eq!(classify(rainfall, condition.label()), by_rain.max(by_condition));
    }

    /// A reading's tier depends on rainfall and condition only
    #[test]
    fn prop_tier_ignores_other_fields(seed in any::<u64>(), temperature in 20i32..=35, wind in 1i32..=15) {
        let reading = sample(&mut ChaCha8Rng::seed_from_u64(seed), None);
        let altered = Reading {
            temperature_c: temperature,
            feels_like_c: temperature,
            wind_speed_kph: wind,
            location: "Somewhere Else".to_string(),
            ..reading.clone()
        };
        prop_assert_eq!(reading.alert_tier(), altered.alert_tier());
    }

    /// Five entries, today anchored on the current reading, later days in range
    #[test]
    fn prop_projection_shape(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let current = sample(&mut rng, None);
        let forecast = project(&mut rng, &current);

        prop_assert_eq!(forecast.len(), 5);
        prop_assert_eq!(forecast[0].condition, current.condition);
        prop_assert_eq!(forecast[0].temperature_c, current.temperature_c);
        for (entry, day) in forecast.iter().zip(DayLabel::ALL) {
            prop_assert_eq!(entry.day_label, day);
        }
        for entry in &forecast[1..] {
            prop_assert!(TEMPERATURE_RANGE_C.contains(&entry.temperature_c));
            prop_assert!(SkyCondition::ALL.contains(&entry.condition));
        }
    }

    /// The composed report agrees with calling the core step by step
    #[test]
    fn prop_compose_matches_pipeline(seed in any::<u64>()) {
        let report = compose(&mut ChaCha8Rng::seed_from_u64(seed), None);

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let reading = sample(&mut rng, None);
        let tier = classify(reading.rainfall_mm, reading.condition.label());
        let forecast = project(&mut rng, &reading);

        prop_assert_eq!(report.tier(), tier);
        prop_assert_eq!(report.forecast, forecast);
        prop_assert_eq!(report.reading, reading);
    }
}
