/// Base URL of the hotel backend API.
/// Configured at compile time:
/// - Development: http://localhost:3000 (via API_BASE_URL in .env)
/// - Production: https://api.hotelassistant.com (default)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "https://api.hotelassistant.com",
};

pub const STORAGE_KEY_AUTH_TOKEN: &str = "hotelAssistant_authToken";
pub const STORAGE_KEY_LANGUAGE: &str = "hotelAssistant_language";
pub const STORAGE_KEY_ACTIVE_CLEANING: &str = "hotelAssistant_activeCleaning";
pub const STORAGE_KEY_ACTIVE_MAINTENANCE: &str = "hotelAssistant_activeMaintenance";
