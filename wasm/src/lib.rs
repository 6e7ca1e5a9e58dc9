//! WebAssembly module for the Route 360 Flood & Weather Alert System
//!
//! Provides the client-side computation behind the alert page:
//! - Synthetic weather readings for a typed or random location
//! - Flood alert classification
//! - Five-day outlooks
//! - Local acknowledgment of alert sign-ups
//!
//! Structured results cross the boundary as JSON strings.

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

use shared::{
    classify, compose, normalize_location, project, sample, DEFAULT_CONFIRMATION_DISPLAY_SECS,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"flood alert core loaded".into());
}

/// Fresh generator seeded from the browser's `Math.random()`
fn browser_rng() -> ChaCha8Rng {
    let high = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let low = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    ChaCha8Rng::seed_from_u64((high << 32) | low)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Generate a reading; `location` is used verbatim unless missing or empty
#[wasm_bindgen]
pub fn sample_weather(location: Option<String>) -> Result<String, JsValue> {
    let reading = sample(&mut browser_rng(), location.as_deref());
    to_json(&reading)
}

/// Alert tier label for a rainfall amount and condition
#[wasm_bindgen]
pub fn classify_alert(rainfall_mm: i32, condition: &str) -> String {
    classify(rainfall_mm, condition).to_string()
}

/// Explanation text for the tier `classify_alert` would return
#[wasm_bindgen]
pub fn alert_explanation(rainfall_mm: i32, condition: &str) -> String {
    classify(rainfall_mm, condition).explanation().to_string()
}

/// Project the five-day outlook for a reading given as JSON
#[wasm_bindgen]
pub fn project_forecast(reading_json: &str) -> Result<String, JsValue> {
    project_forecast_with(&mut browser_rng(), reading_json)
}

fn project_forecast_with<R: Rng + ?Sized>(
    rng: &mut R,
    reading_json: &str,
) -> Result<String, JsValue> {
    let reading: Reading = serde_json::from_str(reading_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid reading JSON: {}", e)))?;
    to_json(&project(rng, &reading))
}

/// Full view-state for the search box input: reading, alert and outlook
#[wasm_bindgen]
pub fn generate_report(location: Option<String>) -> Result<String, JsValue> {
    generate_report_with(&mut browser_rng(), location.as_deref())
}

fn generate_report_with<R: Rng + ?Sized>(
    rng: &mut R,
    location: Option<&str>,
) -> Result<String, JsValue> {
    to_json(&compose(rng, location.and_then(normalize_location)))
}

/// Icon name for a condition label
#[wasm_bindgen]
pub fn weather_icon(condition: &str) -> String {
    WeatherIcon::for_condition(condition).name().to_string()
}

/// Acknowledge an alert sign-up.
///
/// Returns the confirmation as JSON, or nothing when the phone number is blank.
#[wasm_bindgen]
pub fn subscribe(phone_number: String, email: Option<String>) -> Result<Option<String>, JsValue> {
    let now = DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64)
        .ok_or_else(|| JsValue::from_str("Browser clock out of range"))?;
    subscribe_with(&mut browser_rng(), now, phone_number, email)
}

fn subscribe_with<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    phone_number: String,
    email: Option<String>,
) -> Result<Option<String>, JsValue> {
    let request = SubscriptionRequest {
        phone_number,
        email,
    };
    let confirmation_id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();

    request
        .acknowledge(confirmation_id, now, DEFAULT_CONFIRMATION_DISPLAY_SECS)
        .map(|ack| to_json(&ack))
        .transpose()
}

/// The gazetteer as a JSON array
#[wasm_bindgen]
pub fn gazetteer() -> Result<String, JsValue> {
    to_json(&GHANA_LOCATIONS)
}
