//! Common constants: the gazetteer and the value ranges of a reading

use std::ops::RangeInclusive;

/// Ghanaian cities and towns a random reading can be placed in
pub const GHANA_LOCATIONS: &[&str] = &[
    "Accra", "Kumasi", "Tamale", "Cape Coast", "Ho", "Sunyani", "Koforidua", "Takoradi",
    "Tema", "Wa", "Bolgatanga", "Techiman", "Obuasi", "Tarkwa", "Winneba", "Kasoa",
    "Nkawkaw", "Yendi", "Berekum", "Kintampo", "Dunkwa", "Prestea", "Axim", "Elmina",
    "Saltpond", "Swedru", "Nsawam", "Suhum", "Akim Oda", "Begoro", "Hohoe", "Kpando",
    "Aflao", "Keta", "Anloga", "Denu", "Bawku", "Navrongo", "Lawra", "Jirapa",
    "Tumu", "Damongo", "Salaga", "Kpandai", "Zabzugu", "Gushiegu", "Savelugu", "Tolon",
    "Kumbungu", "Mion", "Karaga", "Garu", "Tempane", "Binduri", "Pusiga", "Paga",
];

/// Air temperature, °C
pub const TEMPERATURE_RANGE_C: RangeInclusive<i32> = 20..=35;

/// Rainfall, mm
pub const RAINFALL_RANGE_MM: RangeInclusive<i32> = 0..=100;

/// Relative humidity, %
pub const HUMIDITY_RANGE_PCT: RangeInclusive<i32> = 50..=95;

/// Wind speed, km/h
pub const WIND_SPEED_RANGE_KPH: RangeInclusive<i32> = 1..=15;

/// Offset of the feels-like temperature from the air temperature.
///
/// Deliberately asymmetric: readings can feel up to 3°C cooler but only 2°C
/// warmer.
pub const FEELS_LIKE_OFFSET_RANGE_C: RangeInclusive<i32> = -3..=2;

/// Whether `location` names a place in the gazetteer (exact match)
pub fn is_known_location(location: &str) -> bool {
    GHANA_LOCATIONS.contains(&location)
}
