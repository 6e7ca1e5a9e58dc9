//! Composition of the core into a single view-state

use rand::Rng;

use crate::classifier::classify;
use crate::models::WeatherReport;
use crate::projector::project;
use crate::sampler::sample;

/// Sample a reading, classify it and project its outlook, in that order
pub fn compose<R: Rng + ?Sized>(rng: &mut R, location: Option<&str>) -> WeatherReport {
    let reading = sample(rng, location);
    let alert = classify(reading.rainfall_mm, reading.condition.label()).notice();
    let forecast = project(rng, &reading);

    WeatherReport {
        reading,
        alert,
        forecast,
    }
}
