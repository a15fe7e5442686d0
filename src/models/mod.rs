// Shared data model, mirrored against the backend contract

pub mod api;
pub mod billing;
pub mod menu;
pub mod requests;
pub mod user;

pub use api::ApiResponse;
pub use billing::{BillItem, CheckoutData, LateCheckout};
pub use menu::{order_total, Menu, MenuCategory, MenuItem, OrderItem};
pub use requests::{CleaningRequest, MaintenanceRequest, Priority, RequestKind};
pub use user::User;
