use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::Route;
use crate::components::Footer;
use crate::hooks::use_prefs;
use crate::models::Menu;
use crate::pages::PageProps;
use crate::services::dining_service::{self, ReservationData};
use crate::utils::t;

#[function_component(FoodDining)]
pub fn food_dining(props: &PageProps) -> Html {
    let prefs = use_prefs();
    let lang = prefs.current_language.clone();

    let show_reservation = use_state(|| false);
    let reserving = use_state(|| false);
    let restaurant_menu: UseStateHandle<Option<Menu>> = use_state(|| None);
    let show_restaurant_menu = use_state(|| false);

    let date_ref = use_node_ref();
    let time_ref = use_node_ref();
    let guests_ref = use_node_ref();
    let requests_ref = use_node_ref();

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::Home))
    };
    let to_room_service = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::RoomService))
    };
    let toggle_reservation = {
        let show_reservation = show_reservation.clone();
        Callback::from(move |_e: MouseEvent| show_reservation.set(!*show_reservation))
    };

    // Fetched lazily the first time the guest opens the section.
    let toggle_restaurant_menu = {
        let restaurant_menu = restaurant_menu.clone();
        let show_restaurant_menu = show_restaurant_menu.clone();
        Callback::from(move |_e: MouseEvent| {
            let opening = !*show_restaurant_menu;
            show_restaurant_menu.set(opening);
            if opening && restaurant_menu.is_none() {
                let restaurant_menu = restaurant_menu.clone();
                spawn_local(async move {
                    match dining_service::get_restaurant_menu().await {
                        Ok(menu) => restaurant_menu.set(Some(menu)),
                        Err(err) => log::error!("❌ Could not load restaurant menu: {err}"),
                    }
                });
            }
        })
    };

    let on_reserve = {
        let lang = lang.clone();
        let reserving = reserving.clone();
        let show_reservation = show_reservation.clone();
        let date_ref = date_ref.clone();
        let time_ref = time_ref.clone();
        let guests_ref = guests_ref.clone();
        let requests_ref = requests_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *reserving {
                return;
            }

            let guests = guests_ref
                .cast::<HtmlInputElement>()
                .and_then(|el| el.value().parse::<u32>().ok())
                .unwrap_or(2);
            let data = ReservationData {
                date: date_ref
                    .cast::<HtmlInputElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                time: time_ref
                    .cast::<HtmlInputElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                guests,
                special_requests: requests_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
            };

            let lang = lang.clone();
            let reserving = reserving.clone();
            let show_reservation = show_reservation.clone();
            reserving.set(true);

            spawn_local(async move {
                match dining_service::make_reservation(&data).await {
                    Ok(response) if response.success => {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!(
                                "✅ Table reserved for {} on {} at {}",
                                data.guests, data.date, data.time
                            ));
                        }
                        show_reservation.set(false);
                    }
                    Ok(response) => {
                        let message = response.message.unwrap_or_else(|| t(&lang, "error"));
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&message);
                        }
                    }
                    Err(err) => {
                        log::error!("❌ Reservation failed: {err}");
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&t(&lang, "error"));
                        }
                    }
                }
                reserving.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <button class="btn btn-text back-link" onclick={on_back}>
                {format!("← {}", t(&lang, "back_home"))}
            </button>

            <div class="card">
                <h1 class="heading-primary">{t(&lang, "food_title")}</h1>
                <p class="help-text text-center">{t(&lang, "food_subtitle")}</p>
            </div>

            // Mock order status until the orders endpoint exists.
            <div class="card">
                <h2 class="heading-secondary">{t(&lang, "current_orders")}</h2>
                <div class="order-line">
                    <span>{"🛎️ Club Sandwich, Sparkling Water"}</span>
                    <span class="help-text">
                        {format!("{} · {} 25 {}", t(&lang, "in_progress"), t(&lang, "eta"), t(&lang, "minutes"))}
                    </span>
                </div>
            </div>

            <div class="card dining-option">
                <div class="option-icon">{"🛎️"}</div>
                <h2 class="heading-secondary">{t(&lang, "room_service")}</h2>
                <p class="help-text">{t(&lang, "room_service_desc")}</p>
                <button class="btn btn-primary" onclick={to_room_service}>
                    {t(&lang, "select_room_service")}
                </button>
            </div>

            <div class="card dining-option">
                <div class="option-icon">{"🍷"}</div>
                <h2 class="heading-secondary">{t(&lang, "restaurant")}</h2>
                <p class="help-text">{t(&lang, "restaurant_desc")}</p>
                <p class="help-text">{"Open daily 7:00 AM - 11:00 PM, Lobby Level"}</p>
                <button class="btn btn-secondary" onclick={toggle_restaurant_menu}>
                    {t(&lang, "select_restaurant")}
                </button>

                if *show_restaurant_menu {
                    {
                        match &*restaurant_menu {
                            None => html! {
                                <p class="help-text">{t(&lang, "loading")}</p>
                            },
                            Some(menu) => html! {
                                <div class="restaurant-menu">
                                    { for menu.iter().map(|(section, category)| html! {
                                        <div class="menu-section">
                                            <h3 class="option-title">{section.clone()}</h3>
                                            <p class="help-text">{category.available_time.clone()}</p>
                                            { for category.items.iter().map(|item| html! {
                                                <div class="order-line">
                                                    <span>{item.name.clone()}</span>
                                                    <span class="price">{format!("${:.2}", item.price)}</span>
                                                </div>
                                            }) }
                                        </div>
                                    }) }
                                </div>
                            },
                        }
                    }
                }
            </div>

            <div class="card dining-option">
                <div class="option-icon">{"📅"}</div>
                <h2 class="heading-secondary">{t(&lang, "reservations")}</h2>
                <p class="help-text">{t(&lang, "reservations_desc")}</p>
                <button class="btn btn-secondary" onclick={toggle_reservation}>
                    {t(&lang, "make_reservation")}
                </button>

                if *show_reservation {
                    <form class="reservation-form" onsubmit={on_reserve}>
                        <div class="form-group">
                            <label class="form-label" for="res-date">{t(&lang, "bill_date")}</label>
                            <input type="date" id="res-date" class="form-input" ref={date_ref} required=true />
                        </div>
                        <div class="form-group">
                            <label class="form-label" for="res-time">{t(&lang, "preferred_time")}</label>
                            <input type="time" id="res-time" class="form-input" ref={time_ref} required=true />
                        </div>
                        <div class="form-group">
                            <label class="form-label" for="res-guests">{t(&lang, "guest")}</label>
                            <input type="number" id="res-guests" class="form-input" min="1" max="12" value="2" ref={guests_ref} />
                        </div>
                        <div class="form-group">
                            <label class="form-label" for="res-requests">{t(&lang, "special_instructions")}</label>
                            <textarea id="res-requests" class="form-input" rows="2" ref={requests_ref} />
                        </div>
                        <button class="btn btn-primary" type="submit" disabled={*reserving}>
                            { if *reserving { t(&lang, "loading") } else { t(&lang, "make_reservation") } }
                        </button>
                    </form>
                }
            </div>

            <Footer />
        </div>
    }
}
