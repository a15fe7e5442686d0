use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::Route;
use crate::components::{FloatingLanguageSelector, Footer, OptionCard, StatusNotification};
use crate::hooks::{self, use_prefs, use_session};
use crate::models::RequestKind;
use crate::pages::PageProps;
use crate::services::housekeeping_service;
use crate::state::PrefsAction;

#[function_component(Home)]
pub fn home(props: &PageProps) -> Html {
    let session = use_session();
    let prefs = use_prefs();

    let guest_name = session
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Guest".to_string());
    let room = session
        .user
        .as_ref()
        .and_then(|u| u.room_number.clone())
        .unwrap_or_else(|| "-".to_string());

    let nav = |route: Route| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: ()| on_navigate.emit(route))
    };

    // Flip DND on the backend first, only then flip the local flag.
    let on_toggle_dnd = {
        let prefs = prefs.clone();
        Callback::from(move |_: ()| {
            let prefs = prefs.clone();
            let desired = !prefs.dnd_active;
            spawn_local(async move {
                match housekeeping_service::toggle_dnd(desired).await {
                    Ok(_) => prefs.dispatch(PrefsAction::ToggleDnd),
                    Err(err) => log::error!("❌ Could not update do-not-disturb: {err}"),
                }
            });
        })
    };

    let on_cancel_cleaning = {
        let prefs = prefs.clone();
        Callback::from(move |_: ()| {
            hooks::remove_active_request(&prefs, RequestKind::Cleaning);
        })
    };

    let on_cancel_maintenance = {
        let prefs = prefs.clone();
        Callback::from(move |_: ()| {
            hooks::remove_active_request(&prefs, RequestKind::Maintenance);
        })
    };

    let on_logout = {
        let session = session.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| {
            hooks::logout(&session);
            on_navigate.emit(Route::Login);
        })
    };

    html! {
        <div class="container">
            <FloatingLanguageSelector />

            <div class="card home-header">
                <h1 class="heading-primary">{format!("Hello, {guest_name}!")}</h1>
                <p class="help-text text-center">{format!("Room {room}")}</p>
                <button class="btn btn-text" onclick={on_logout}>{"Log out"}</button>
            </div>

            <div class="status-area">
                if let Some(request) = &prefs.active_cleaning {
                    <StatusNotification
                        icon="🧹"
                        title="Room cleaning requested"
                        time={format!("Requested at {}", request.requested)}
                        action_text="Cancel"
                        on_action={on_cancel_cleaning}
                    />
                }
                if let Some(request) = &prefs.active_maintenance {
                    <StatusNotification
                        icon="🔧"
                        title={format!("Maintenance: {}", request.issue)}
                        time={format!("Reported at {}", request.requested)}
                        action_text="Cancel"
                        on_action={on_cancel_maintenance}
                    />
                }
                if prefs.dnd_active {
                    <StatusNotification
                        icon="🔕"
                        title="Do Not Disturb is active"
                        time="Housekeeping will not enter your room"
                        action_text="Turn off"
                        on_action={on_toggle_dnd.clone()}
                    />
                }
            </div>

            <h2 class="heading-secondary">{"How can we help you?"}</h2>
            <div class="options-grid">
                <OptionCard
                    id="option-food"
                    icon="🍽️"
                    title="Food & Dining"
                    description="Room service, restaurant and bar"
                    on_click={nav(Route::FoodDining)}
                />
                <OptionCard
                    id="option-clean"
                    icon="🧹"
                    title="Clean My Room"
                    description="Request housekeeping"
                    on_click={nav(Route::CleanRoom)}
                />
                <OptionCard
                    id="option-dnd"
                    icon={ if prefs.dnd_active { "🔕" } else { "🔔" } }
                    title="Do Not Disturb"
                    description={ if prefs.dnd_active { "Currently on. Tap to turn off" } else { "Currently off. Tap to turn on" } }
                    on_click={on_toggle_dnd}
                />
                <OptionCard
                    id="option-maintenance"
                    icon="🔧"
                    title="Report an Issue"
                    description="Something broken in your room?"
                    on_click={nav(Route::Maintenance)}
                />
                <OptionCard
                    id="option-amenities"
                    icon="🏊"
                    title="Hotel Amenities"
                    description="Pool, spa, gym and more"
                    on_click={nav(Route::Amenities)}
                />
                <OptionCard
                    id="option-map"
                    icon="🗺️"
                    title="Hotel Map"
                    description="Find your way around"
                    on_click={nav(Route::HotelMap)}
                />
                <OptionCard
                    id="option-attractions"
                    icon="📍"
                    title="Local Attractions"
                    description="Things to do nearby"
                    on_click={nav(Route::LocalAttractions)}
                />
                <OptionCard
                    id="option-lost-found"
                    icon="🔍"
                    title="Lost & Found"
                    description="Report a lost item"
                    on_click={nav(Route::LostFound)}
                />
                <OptionCard
                    id="option-feedback"
                    icon="💬"
                    title="Feedback"
                    description="Tell us how we're doing"
                    on_click={nav(Route::Feedback)}
                />
                <OptionCard
                    id="option-chat"
                    icon="🤖"
                    title="Hotel Assistant"
                    description="Chat with our virtual assistant"
                    on_click={nav(Route::Chatbot)}
                />
                <OptionCard
                    id="option-checkout"
                    icon="🧳"
                    title="Check-Out"
                    description="Review your bill and check out"
                    on_click={nav(Route::CheckOut)}
                />
            </div>

            <Footer />
        </div>
    }
}
