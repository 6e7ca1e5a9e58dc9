//! HTTP handlers for flood alert sign-ups

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use shared::SubscriptionRequest;

use crate::error::AppResult;
use crate::services::SubscriptionOutcome;
use crate::AppState;

/// Submit the sign-up form
pub async fn create_subscription(
    State(state): State<AppState>,
    payload: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> AppResult<Json<SubscriptionOutcome>> {
    let Json(request) = payload?;
    Ok(Json(state.subscriptions.subscribe(&request)))
}
