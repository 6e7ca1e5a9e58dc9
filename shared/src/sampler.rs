//! Synthetic weather readings

use rand::Rng;

use crate::models::Reading;
use crate::types::{
    FEELS_LIKE_OFFSET_RANGE_C, GHANA_LOCATIONS, HUMIDITY_RANGE_PCT, RAINFALL_RANGE_MM,
    TEMPERATURE_RANGE_C, WIND_SPEED_RANGE_KPH,
};

/// Produce a synthetic reading.
///
/// A non-empty `location` is used verbatim, whitespace included, whether or
/// not it is in the gazetteer. Otherwise a gazetteer place is drawn
/// uniformly. Every field is drawn independently and uniformly from its range.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, location: Option<&str>) -> Reading {
    let location = match location {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => random_location(rng).to_string(),
    };
    let condition = rng.gen();
    let temperature_c = rng.gen_range(TEMPERATURE_RANGE_C);
    let rainfall_mm = rng.gen_range(RAINFALL_RANGE_MM);
    let humidity_pct = rng.gen_range(HUMIDITY_RANGE_PCT);
    let wind_speed_kph = rng.gen_range(WIND_SPEED_RANGE_KPH);
    let feels_like_c = temperature_c + rng.gen_range(FEELS_LIKE_OFFSET_RANGE_C);

    Reading {
        location,
        condition,
        temperature_c,
        rainfall_mm,
        humidity_pct,
        wind_speed_kph,
        feels_like_c,
    }
}

/// Draw a place uniformly from the gazetteer
pub fn random_location<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GHANA_LOCATIONS[rng.gen_range(0..GHANA_LOCATIONS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::is_known_location;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_named_location_passes_through() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(sample(&mut rng, Some("Kumasi")).location, "Kumasi");
        assert_eq!(sample(&mut rng, Some("kUMASI")).location, "kUMASI");
        assert_eq!(sample(&mut rng, Some("Lagos")).location, "Lagos");
        assert_eq!(sample(&mut rng, Some(" Ho ")).location, " Ho ");
    }

    #[test]
    fn test_missing_location_comes_from_gazetteer() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for location in [None, Some("")] {
            let reading = sample(&mut rng, location);
            assert!(is_known_location(&reading.location), "{}", reading.location);
        }
    }

    #[test]
    fn test_whitespace_location_is_kept() {
        // Trimming is up to the search box, not the sampler
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(sample(&mut rng, Some("   ")).location, "   ");
        assert_eq!(sample(&mut rng, Some("\t")).location, "\t");
    }

    #[test]
    fn test_same_seed_same_reading() {
        let a = sample(&mut ChaCha8Rng::seed_from_u64(99), None);
        let b = sample(&mut ChaCha8Rng::seed_from_u64(99), None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_location_reaches_whole_gazetteer() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..5_000 {
            seen.insert(random_location(&mut rng));
        }
        assert_eq!(seen.len(), GHANA_LOCATIONS.len());
    }
}
