//! Flood alert sign-ups
//!
//! Sign-ups are acknowledged and logged, nothing more: there is no store and
//! no delivery channel.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::{mask_phone, SubscriptionAck, SubscriptionRequest};
use uuid::Uuid;

use crate::config::SubscriptionConfig;

/// Result of submitting the sign-up form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubscriptionOutcome {
    Subscribed(SubscriptionAck),
    /// Blank phone number; the form does nothing
    Ignored,
}

#[derive(Clone)]
pub struct SubscriptionService {
    display_for_secs: u32,
}

impl SubscriptionService {
    pub fn new(config: &SubscriptionConfig) -> Self {
        Self {
            display_for_secs: config.confirmation_display_secs,
        }
    }

    pub fn subscribe(&self, request: &SubscriptionRequest) -> SubscriptionOutcome {
        match request.acknowledge(Uuid::new_v4(), Utc::now(), self.display_for_secs) {
            Some(ack) => {
                tracing::info!(
                    phone = %mask_phone(&request.phone_number),
                    has_email = request.email.is_some(),
                    confirmation_id = %ack.confirmation_id,
                    "Acknowledged flood alert subscription"
                );
                SubscriptionOutcome::Subscribed(ack)
            }
            None => {
                tracing::debug!("Ignored subscription without a phone number");
                SubscriptionOutcome::Ignored
            }
        }
    }
}
