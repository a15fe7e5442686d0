use serde::{Deserialize, Serialize};

use crate::models::{ApiResponse, User};
use crate::services::api_client::{self, ApiError};
use crate::utils::constants::STORAGE_KEY_AUTH_TOKEN;
use crate::utils::storage;

#[derive(Serialize)]
struct LoginRequest {
    code: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub checked_in: bool,
}

/// Log in with a reservation code. When the backend confirms and supplies a
/// token, persist it so subsequent requests carry the bearer header.
pub async fn login_user(reservation_code: &str) -> Result<ApiResponse<LoginData>, ApiError> {
    log::info!("🔐 Logging in with reservation code");

    let request = LoginRequest {
        code: reservation_code.to_string(),
    };
    let response = api_client::post::<LoginData, _>("/auth/login", &request).await?;

    if response.success {
        if let Some(data) = &response.data {
            if !data.token.is_empty() {
                let _ = storage::save_string(STORAGE_KEY_AUTH_TOKEN, &data.token);
                log::info!("💾 Auth token stored");
            }
        }
    }

    Ok(response)
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInData {
    pub phone: String,
    pub id_type: String,
    pub id_number: String,
    pub arrival_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub special_requests: String,
}

pub async fn check_in_user(form: &CheckInData) -> Result<ApiResponse<User>, ApiError> {
    log::info!("🛎️ Submitting check-in form");
    api_client::post("/checkin", form).await
}

/// Drop the persisted token. The session reset itself happens in the state
/// layer; this only clears what the API client reads.
pub fn logout_user() {
    let _ = storage::remove_from_storage(STORAGE_KEY_AUTH_TOKEN);
}
