// API service for housekeeping, maintenance and do-not-disturb

use serde::{Deserialize, Serialize};

use crate::models::{ApiResponse, CleaningRequest, MaintenanceRequest, Priority};
use crate::services::api_client::{self, ApiError};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningRequestData {
    pub cleaning_type: String,
    pub cleaning_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cleaning_notes: String,
    pub not_present: bool,
}

pub async fn request_cleaning(
    data: &CleaningRequestData,
) -> Result<ApiResponse<CleaningRequest>, ApiError> {
    log::info!("🧹 Requesting cleaning: {}", data.cleaning_type);
    api_client::post("/room/cleaning", data).await
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequestData {
    pub category: String,
    pub description: String,
    pub priority: Priority,
    pub not_present: bool,
    pub contact_method: String,
}

pub async fn request_maintenance(
    data: &MaintenanceRequestData,
) -> Result<ApiResponse<MaintenanceRequest>, ApiError> {
    log::info!(
        "🔧 Reporting maintenance issue: {} ({})",
        data.category,
        data.priority.as_str()
    );
    api_client::post("/room/maintenance", data).await
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleDays {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningSchedule {
    pub days: ScheduleDays,
    #[serde(default)]
    pub preferred_time: Option<String>,
}

pub async fn get_cleaning_schedule() -> Result<ApiResponse<CleaningSchedule>, ApiError> {
    api_client::get("/room/cleaning/schedule").await
}

pub async fn update_cleaning_schedule(
    schedule: &CleaningSchedule,
) -> Result<ApiResponse<CleaningSchedule>, ApiError> {
    log::info!("📅 Updating cleaning schedule");
    api_client::post("/room/cleaning/schedule", schedule).await
}

#[derive(Serialize)]
struct DndRequest {
    active: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DndStatus {
    pub active: bool,
}

/// Tell the backend the desired DND state. Callers must only flip the local
/// flag after this succeeds, otherwise local and server state diverge.
pub async fn toggle_dnd(active: bool) -> Result<ApiResponse<DndStatus>, ApiError> {
    log::info!("🔕 Setting do-not-disturb: {}", active);
    api_client::post("/room/dnd", &DndRequest { active }).await
}
