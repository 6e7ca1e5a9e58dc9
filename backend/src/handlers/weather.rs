//! HTTP handlers for weather report endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{ForecastEntry, Reading, WeatherIcon, WeatherReport, GHANA_LOCATIONS};

use crate::error::AppResult;
use crate::AppState;

/// Query parameters for a location search
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
}

/// A report stamped with the time it was generated
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReportResponse {
    #[serde(flatten)]
    pub report: WeatherReport,
    /// Icon for the current condition
    pub icon: WeatherIcon,
    pub generated_at: DateTime<Utc>,
}

impl From<WeatherReport> for WeatherReportResponse {
    fn from(report: WeatherReport) -> Self {
        Self {
            icon: report.reading.icon(),
            report,
            generated_at: Utc::now(),
        }
    }
}

/// Get a report for a typed location (or a random place when blank)
pub async fn get_weather(
    State(state): State<AppState>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> AppResult<Json<WeatherReportResponse>> {
    let Query(query) = query?;
    let report = state.weather.search(query.location.as_deref()).await?;
    Ok(Json(report.into()))
}

/// Get a report for the caller's current location
pub async fn get_current_location_weather(
    State(state): State<AppState>,
) -> AppResult<Json<WeatherReportResponse>> {
    let report = state.weather.current_location().await?;
    Ok(Json(report.into()))
}

/// Project the five-day outlook for a reading
pub async fn project_forecast(
    State(state): State<AppState>,
    payload: Result<Json<Reading>, JsonRejection>,
) -> AppResult<Json<Vec<ForecastEntry>>> {
    let Json(reading) = payload?;
    let forecast = state.weather.forecast(&reading)?;
    Ok(Json(forecast))
}

/// List the places a random report can be placed in
pub async fn list_locations() -> Json<&'static [&'static str]> {
    Json(GHANA_LOCATIONS)
}
