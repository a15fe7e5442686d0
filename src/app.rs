use yew::prelude::*;

use crate::hooks::{PrefsHandle, SessionHandle};
use crate::pages::{
    Amenities, CheckIn, CheckOut, Chatbot, CleanRoom, Feedback, FoodDining, Home, HotelMap,
    LanguageSelection, LocalAttractions, Login, LostFound, Maintenance, RoomService,
};
use crate::state::{PrefsState, SessionState};

/// All screens of the app. Navigation is a plain enum switch, the whole app
/// lives on one URL.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Route {
    #[default]
    LanguageSelection,
    Login,
    CheckIn,
    Home,
    FoodDining,
    RoomService,
    Amenities,
    HotelMap,
    LocalAttractions,
    CleanRoom,
    Maintenance,
    LostFound,
    Feedback,
    Chatbot,
    CheckOut,
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(SessionState::default);
    let prefs = use_reducer(PrefsState::restore);
    let route = use_state(Route::default);

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            log::debug!("🧭 Navigating to {:?}", next);
            route.set(next);
        })
    };

    let page = match *route {
        Route::LanguageSelection => html! { <LanguageSelection on_navigate={on_navigate.clone()} /> },
        Route::Login => html! { <Login on_navigate={on_navigate.clone()} /> },
        Route::CheckIn => html! { <CheckIn on_navigate={on_navigate.clone()} /> },
        Route::Home => html! { <Home on_navigate={on_navigate.clone()} /> },
        Route::FoodDining => html! { <FoodDining on_navigate={on_navigate.clone()} /> },
        Route::RoomService => html! { <RoomService on_navigate={on_navigate.clone()} /> },
        Route::Amenities => html! { <Amenities on_navigate={on_navigate.clone()} /> },
        Route::HotelMap => html! { <HotelMap on_navigate={on_navigate.clone()} /> },
        Route::LocalAttractions => html! { <LocalAttractions on_navigate={on_navigate.clone()} /> },
        Route::CleanRoom => html! { <CleanRoom on_navigate={on_navigate.clone()} /> },
        Route::Maintenance => html! { <Maintenance on_navigate={on_navigate.clone()} /> },
        Route::LostFound => html! { <LostFound on_navigate={on_navigate.clone()} /> },
        Route::Feedback => html! { <Feedback on_navigate={on_navigate.clone()} /> },
        Route::Chatbot => html! { <Chatbot on_navigate={on_navigate.clone()} /> },
        Route::CheckOut => html! { <CheckOut on_navigate={on_navigate.clone()} /> },
    };

    html! {
        <ContextProvider<SessionHandle> context={session}>
            <ContextProvider<PrefsHandle> context={prefs}>
                <div class="app">
                    { page }
                </div>
            </ContextProvider<PrefsHandle>>
        </ContextProvider<SessionHandle>>
    }
}
