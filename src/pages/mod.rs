use yew::prelude::*;

use crate::app::Route;

/// Every page receives the app-level navigation callback.
#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub on_navigate: Callback<Route>,
}

pub mod amenities;
pub mod chatbot;
pub mod check_in;
pub mod check_out;
pub mod clean_room;
pub mod feedback;
pub mod food_dining;
pub mod home;
pub mod hotel_map;
pub mod language_selection;
pub mod local_attractions;
pub mod login;
pub mod lost_found;
pub mod maintenance;
pub mod room_service;

pub use amenities::Amenities;
pub use chatbot::Chatbot;
pub use check_in::CheckIn;
pub use check_out::CheckOut;
pub use clean_room::CleanRoom;
pub use feedback::Feedback;
pub use food_dining::FoodDining;
pub use home::Home;
pub use hotel_map::HotelMap;
pub use language_selection::LanguageSelection;
pub use local_attractions::LocalAttractions;
pub use login::Login;
pub use lost_found::LostFound;
pub use maintenance::Maintenance;
pub use room_service::RoomService;
