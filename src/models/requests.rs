use serde::{Deserialize, Serialize};

/// Maintenance ticket priority as reported by the guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// The two request kinds the app tracks as "active" on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Cleaning,
    Maintenance,
}

/// An in-flight housekeeping request, built from the API response plus the
/// form fields the guest submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningRequest {
    pub id: String,
    pub status: String,
    pub requested: String,
    #[serde(rename = "type")]
    pub cleaning_type: String,
    #[serde(default)]
    pub eta: Option<String>,
}

/// An in-flight maintenance ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: String,
    pub status: String,
    pub requested: String,
    pub issue: String,
    pub priority: Priority,
    #[serde(default)]
    pub eta: Option<String>,
}
