use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::Route;
use crate::components::Footer;
use crate::hooks::use_session;
use crate::pages::PageProps;
use crate::services::auth_service::{self, CheckInData};
use crate::state::SessionAction;

#[function_component(CheckIn)]
pub fn check_in(props: &PageProps) -> Html {
    let session = use_session();
    let submitting = use_state(|| false);

    let phone_ref = use_node_ref();
    let id_type_ref = use_node_ref();
    let id_number_ref = use_node_ref();
    let arrival_ref = use_node_ref();
    let requests_ref = use_node_ref();

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

    let on_submit = {
        let session = session.clone();
        let submitting = submitting.clone();
        let on_navigate = props.on_navigate.clone();
        let phone_ref = phone_ref.clone();
        let id_type_ref = id_type_ref.clone();
        let id_number_ref = id_number_ref.clone();
        let arrival_ref = arrival_ref.clone();
        let requests_ref = requests_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let data = CheckInData {
                phone: phone_ref
                    .cast::<HtmlInputElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                id_type: id_type_ref
                    .cast::<HtmlSelectElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                id_number: id_number_ref
                    .cast::<HtmlInputElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                arrival_time: arrival_ref
                    .cast::<HtmlInputElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                special_requests: requests_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
            };

            let session = session.clone();
            let submitting = submitting.clone();
            let on_navigate = on_navigate.clone();
            submitting.set(true);

            spawn_local(async move {
                match auth_service::check_in_user(&data).await {
                    Ok(_) => {
                        log::info!("✅ Check-in complete");
                        session.dispatch(SessionAction::CompleteCheckIn);
                        on_navigate.emit(Route::Home);
                    }
                    Err(err) => {
                        log::error!("❌ Check-in failed: {err}");
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!("Check-in failed: {err}"));
                        }
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <div class="card">
                <h1 class="heading-primary">{"Online Check-In"}</h1>
                <p class="help-text text-center">
                    {format!("Welcome, {guest_name}! Room {room} is waiting for you.")}
                </p>

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label class="form-label" for="phone">{"Phone number"}</label>
                        <input
                            type="tel"
                            id="phone"
                            class="form-input"
                            placeholder="+1 555 0100"
                            ref={phone_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="id-type">{"ID document type"}</label>
                        <select id="id-type" class="form-input" ref={id_type_ref}>
                            <option value="passport">{"Passport"}</option>
                            <option value="id-card">{"ID Card"}</option>
                            <option value="drivers-license">{"Driver's License"}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="id-number">{"ID document number"}</label>
                        <input
                            type="text"
                            id="id-number"
                            class="form-input"
                            ref={id_number_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="arrival-time">{"Estimated arrival time"}</label>
                        <input
                            type="time"
                            id="arrival-time"
                            class="form-input"
                            ref={arrival_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="special-requests">{"Special requests (optional)"}</label>
                        <textarea
                            id="special-requests"
                            class="form-input"
                            rows="3"
                            placeholder="Extra pillows, late arrival, ..."
                            ref={requests_ref}
                        />
                    </div>

                    <button class="btn btn-primary" type="submit" disabled={*submitting}>
                        { if *submitting { "Checking in..." } else { "Complete Check-In" } }
                    </button>
                </form>
            </div>

            <Footer />
        </div>
    }
}
