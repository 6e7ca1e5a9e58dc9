//! HTTP handlers for flood alert classification

use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::Deserialize;
use shared::{classify, AlertNotice, AlertTier};

use crate::error::AppResult;

/// Query parameters for classifying a rainfall/condition pair
#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub rainfall_mm: i32,
    #[serde(default)]
    pub condition: String,
}

/// Classify flood risk for a rainfall amount and condition label
pub async fn classify_alert(
    query: Result<Query<ClassifyQuery>, QueryRejection>,
) -> AppResult<Json<AlertNotice>> {
    let Query(query) = query?;
    Ok(Json(classify(query.rainfall_mm, &query.condition).notice()))
}

/// All alert tiers with their explanations, least severe first
pub async fn list_alert_tiers() -> Json<Vec<AlertNotice>> {
    Json(AlertTier::ALL.iter().map(AlertTier::notice).collect())
}
