//! Flood alert tier models

use serde::{Deserialize, Serialize};

/// Flood-risk severity, in ascending order of severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertTier {
    Normal,
    Watch,
    Warning,
    Emergency,
}

impl AlertTier {
    /// All tiers, least severe first
    pub const ALL: [AlertTier; 4] = [
        AlertTier::Normal,
        AlertTier::Watch,
        AlertTier::Warning,
        AlertTier::Emergency,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AlertTier::Normal => "Normal",
            AlertTier::Watch => "Watch",
            AlertTier::Warning => "Warning",
            AlertTier::Emergency => "Emergency",
        }
    }

    /// What the tier means for people in the affected area
    pub fn explanation(&self) -> &'static str {
        match self {
            AlertTier::Normal => {
                "Weather conditions are stable. No immediate flood risk. Continue normal activities."
            }
            AlertTier::Watch => {
                "Conditions are developing that could lead to flooding. Stay alert and monitor updates."
            }
            AlertTier::Warning => {
                "Flooding is likely or occurring. Avoid low-lying areas and prepare for possible evacuation."
            }
            AlertTier::Emergency => {
                "Severe flooding is imminent or occurring. Take immediate action to protect life and property."
            }
        }
    }

    pub fn notice(&self) -> AlertNotice {
        AlertNotice {
            tier: *self,
            label: self.label().to_string(),
            explanation: self.explanation().to_string(),
        }
    }
}

impl std::fmt::Display for AlertTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An alert tier together with its display text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertNotice {
    pub tier: AlertTier,
    pub label: String,
    pub explanation: String,
}
