// API service for room service orders, menus and table reservations

use serde::{Deserialize, Serialize};

use crate::models::{ApiResponse, Menu};
use crate::services::api_client::{self, ApiError};

/// Fetch the room service menu. An envelope rejection is lifted into
/// `ApiError::Rejected` here because the page has no use for a menu-less
/// success response.
pub async fn get_room_service_menu() -> Result<Menu, ApiError> {
    fetch_menu("/food/room-service-menu").await
}

pub async fn get_restaurant_menu() -> Result<Menu, ApiError> {
    fetch_menu("/food/restaurant-menu").await
}

async fn fetch_menu(path: &str) -> Result<Menu, ApiError> {
    let response = api_client::get::<Menu>(path).await?;
    match response.data {
        Some(menu) if response.success => {
            log::info!("🍽️ Menu loaded: {} sections", menu.len());
            Ok(menu)
        }
        _ => {
            let message = response
                .message
                .unwrap_or_else(|| "Failed to fetch menu".to_string());
            log::error!("❌ Menu fetch rejected: {}", message);
            Err(ApiError::Rejected(message))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    pub items: Vec<OrderLine>,
    pub total: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub special_instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: String,
    pub estimated_delivery: String,
}

pub async fn place_room_service_order(
    order: &OrderData,
) -> Result<ApiResponse<OrderConfirmation>, ApiError> {
    log::info!(
        "🛎️ Placing room service order: {} items, total {:.2}",
        order.items.len(),
        order.total
    );
    api_client::post("/food/room-service/order", order).await
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationData {
    pub date: String,
    pub time: String,
    pub guests: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub special_requests: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationConfirmation {
    pub reservation_id: String,
    pub confirmed: bool,
}

pub async fn make_reservation(
    reservation: &ReservationData,
) -> Result<ApiResponse<ReservationConfirmation>, ApiError> {
    log::info!(
        "📅 Requesting table for {} on {} at {}",
        reservation.guests,
        reservation.date,
        reservation.time
    );
    api_client::post("/food/reservation", reservation).await
}
