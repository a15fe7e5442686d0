use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::Route;
use crate::components::Footer;
use crate::hooks::{self, use_prefs};
use crate::models::CleaningRequest;
use crate::pages::PageProps;
use crate::services::housekeeping_service::{self, CleaningRequestData, CleaningSchedule};
use crate::state::ActiveRequest;
use crate::utils::t;

#[function_component(CleanRoom)]
pub fn clean_room(props: &PageProps) -> Html {
    let prefs = use_prefs();
    let lang = prefs.current_language.clone();

    let submitting = use_state(|| false);
    let schedule: UseStateHandle<Option<CleaningSchedule>> = use_state(|| None);

    let type_ref = use_node_ref();
    let time_ref = use_node_ref();
    let notes_ref = use_node_ref();
    let not_present_ref = use_node_ref();

    {
        let schedule = schedule.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match housekeeping_service::get_cleaning_schedule().await {
                    Ok(response) => schedule.set(response.data),
                    Err(err) => log::warn!("⚠️ Could not load cleaning schedule: {err}"),
                }
            });
        });
    }

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::Home))
    };

    let on_submit = {
        let lang = lang.clone();
        let prefs = prefs.clone();
        let submitting = submitting.clone();
        let on_navigate = props.on_navigate.clone();
        let type_ref = type_ref.clone();
        let time_ref = time_ref.clone();
        let notes_ref = notes_ref.clone();
        let not_present_ref = not_present_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let cleaning_type = type_ref
                .cast::<HtmlSelectElement>()
                .map(|el| el.value())
                .unwrap_or_default();
            if cleaning_type.is_empty() {
                return;
            }
            let data = CleaningRequestData {
                cleaning_type: cleaning_type.clone(),
                cleaning_time: time_ref
                    .cast::<HtmlSelectElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                cleaning_notes: notes_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
                not_present: not_present_ref
                    .cast::<HtmlInputElement>()
                    .map(|el| el.checked())
                    .unwrap_or(false),
            };

            let lang = lang.clone();
            let prefs = prefs.clone();
            let submitting = submitting.clone();
            let on_navigate = on_navigate.clone();
            submitting.set(true);

            spawn_local(async move {
                match housekeeping_service::request_cleaning(&data).await {
                    Ok(response) if response.success => {
                        let request = response.data.unwrap_or_else(|| CleaningRequest {
                            id: format!("{:.0}", js_sys::Date::now()),
                            status: "confirmed".to_string(),
                            requested: chrono::Local::now().format("%H:%M").to_string(),
                            cleaning_type: data.cleaning_type.clone(),
                            eta: None,
                        });
                        hooks::add_active_request(&prefs, ActiveRequest::Cleaning(request));
                        on_navigate.emit(Route::Home);
                    }
                    Ok(response) => {
                        let message = response.message.unwrap_or_else(|| t(&lang, "error"));
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&message);
                        }
                    }
                    Err(err) => {
                        log::error!("❌ Cleaning request failed: {err}");
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&t(&lang, "error"));
                        }
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <button class="btn btn-text back-link" onclick={on_back}>
                {format!("← {}", t(&lang, "back_home"))}
            </button>

            <div class="card">
                <h1 class="heading-primary">{t(&lang, "clean_title")}</h1>
                <p class="help-text text-center">{t(&lang, "available_hours")}</p>
            </div>

            if let Some(request) = &prefs.active_cleaning {
                <div class="card">
                    <h2 class="heading-secondary">{t(&lang, "current_request")}</h2>
                    <p class="help-text">
                        {format!("{} {} · {}", t(&lang, "requested"), request.requested, request.status)}
                    </p>
                </div>
            }

            <div class="card">
                <h2 class="heading-secondary">{t(&lang, "request_housekeeping")}</h2>
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label class="form-label" for="service-type">{t(&lang, "service_type")}</label>
                        <select id="service-type" class="form-input" ref={type_ref} required=true>
                            <option value="" selected=true disabled=true>{t(&lang, "select_service_type")}</option>
                            <option value="full">{t(&lang, "service_full")}</option>
                            <option value="light">{t(&lang, "service_light")}</option>
                            <option value="turndown">{t(&lang, "service_turndown")}</option>
                            <option value="towels">{t(&lang, "service_towels")}</option>
                            <option value="supplies">{t(&lang, "service_supplies")}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="preferred-time">{t(&lang, "preferred_time")}</label>
                        <select id="preferred-time" class="form-input" ref={time_ref}>
                            <option value="asap">{t(&lang, "time_asap")}</option>
                            <option value="morning">{t(&lang, "time_morning")}</option>
                            <option value="afternoon">{t(&lang, "time_afternoon")}</option>
                            <option value="evening">{t(&lang, "time_evening")}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="cleaning-notes">{t(&lang, "special_instructions")}</label>
                        <textarea
                            id="cleaning-notes"
                            class="form-input"
                            rows="2"
                            placeholder={t(&lang, "special_instructions_prompt")}
                            ref={notes_ref}
                        />
                    </div>

                    <div class="form-group checkbox-group">
                        <label class="form-label">
                            <input type="checkbox" ref={not_present_ref} />
                            {t(&lang, "not_present")}
                        </label>
                    </div>

                    <button class="btn btn-primary" type="submit" disabled={*submitting}>
                        { if *submitting { t(&lang, "loading") } else { t(&lang, "submit_request") } }
                    </button>
                </form>
            </div>

            if let Some(current) = &*schedule {
                <div class="card">
                    <h2 class="heading-secondary">{t(&lang, "regular_schedule")}</h2>
                    <p class="help-text">{t(&lang, "scheduled_days")}</p>
                    <p class="help-text">{t(&lang, "adjust_schedule")}</p>
                    <div class="schedule-days">
                        { for [
                            ("Mon", current.days.monday),
                            ("Tue", current.days.tuesday),
                            ("Wed", current.days.wednesday),
                            ("Thu", current.days.thursday),
                            ("Fri", current.days.friday),
                            ("Sat", current.days.saturday),
                            ("Sun", current.days.sunday),
                        ].iter().enumerate().map(|(index, (label, scheduled))| {
                            let onclick = {
                                let schedule = schedule.clone();
                                let current = current.clone();
                                Callback::from(move |_e: MouseEvent| {
                                    let mut updated = current.clone();
                                    let day = match index {
                                        0 => &mut updated.days.monday,
                                        1 => &mut updated.days.tuesday,
                                        2 => &mut updated.days.wednesday,
                                        3 => &mut updated.days.thursday,
                                        4 => &mut updated.days.friday,
                                        5 => &mut updated.days.saturday,
                                        _ => &mut updated.days.sunday,
                                    };
                                    *day = !*day;

                                    // Backend first, then reflect the change locally.
                                    let schedule = schedule.clone();
                                    spawn_local(async move {
                                        match housekeeping_service::update_cleaning_schedule(&updated).await {
                                            Ok(response) if response.success => {
                                                schedule.set(response.data.or(Some(updated)));
                                            }
                                            Ok(_) | Err(_) => {
                                                log::warn!("⚠️ Schedule update was not accepted");
                                            }
                                        }
                                    });
                                })
                            };
                            html! {
                                <span
                                    class={classes!("schedule-day", scheduled.then_some("scheduled"))}
                                    {onclick}
                                >
                                    {*label}
                                </span>
                            }
                        }) }
                    </div>
                </div>
            }

            <Footer />
        </div>
    }
}
