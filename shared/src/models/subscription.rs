//! Flood alert subscription models
//!
//! Subscribing is a local acknowledgment only: nothing is stored and no
//! message is ever sent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::validate_subscriber_phone;

pub const SUBSCRIPTION_CONFIRMATION_MESSAGE: &str = "Successfully subscribed to flood alerts!";

/// How long the confirmation banner stays visible
pub const DEFAULT_CONFIRMATION_DISPLAY_SECS: u32 = 3;

/// Contents of the notification sign-up form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Confirmation shown after a successful sign-up
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionAck {
    pub confirmation_id: Uuid,
    pub message: String,
    pub subscribed_at: DateTime<Utc>,
    pub display_for_secs: u32,
}

impl SubscriptionRequest {
    /// Acknowledge the sign-up.
    ///
    /// Returns `None` when the phone number is blank, in which case the form
    /// does nothing. Phone and email formats are never checked.
    pub fn acknowledge(
        &self,
        confirmation_id: Uuid,
        subscribed_at: DateTime<Utc>,
        display_for_secs: u32,
    ) -> Option<SubscriptionAck> {
        validate_subscriber_phone(&self.phone_number).ok()?;

        Some(SubscriptionAck {
            confirmation_id,
            message: SUBSCRIPTION_CONFIRMATION_MESSAGE.to_string(),
            subscribed_at,
            display_for_secs,
        })
    }
}
