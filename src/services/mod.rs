pub mod api_client;
pub mod auth_service;
pub mod dining_service;
pub mod housekeeping_service;

pub use api_client::ApiError;
