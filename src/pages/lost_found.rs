use gloo_timers::callback::Timeout;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::app::Route;
use crate::components::Footer;
use crate::hooks::use_prefs;
use crate::pages::PageProps;
use crate::utils::t;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Report,
    Found,
    MyReports,
}

struct FoundItem {
    icon: &'static str,
    name: &'static str,
    location: &'static str,
    found_on: &'static str,
}

const FOUND_ITEMS: [FoundItem; 3] = [
    FoundItem {
        icon: "🕶️",
        name: "Black sunglasses",
        location: "Pool area",
        found_on: "Aug 26",
    },
    FoundItem {
        icon: "🔌",
        name: "Phone charger (USB-C)",
        location: "Conference room B",
        found_on: "Aug 25",
    },
    FoundItem {
        icon: "🧣",
        name: "Blue scarf",
        location: "Restaurant",
        found_on: "Aug 24",
    },
];

#[function_component(LostFound)]
pub fn lost_found(props: &PageProps) -> Html {
    let prefs = use_prefs();
    let lang = prefs.current_language.clone();

    let tab = use_state(|| Tab::Report);
    let submitting = use_state(|| false);
    // Reports filed during this visit, shown under My Reports.
    let my_reports: UseStateHandle<Vec<String>> = use_state(Vec::new);

    let name_ref = use_node_ref();
    let description_ref = use_node_ref();
    let location_ref = use_node_ref();
    let contact_ref = use_node_ref();

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::Home))
    };

    let pick_tab = |value: Tab| {
        let tab = tab.clone();
        Callback::from(move |_e: MouseEvent| tab.set(value))
    };

    let on_submit = {
        let lang = lang.clone();
        let submitting = submitting.clone();
        let my_reports = my_reports.clone();
        let tab = tab.clone();
        let name_ref = name_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let Some(input) = name_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let item_name = input.value();
            if item_name.trim().is_empty() {
                return;
            }

            submitting.set(true);
            log::info!("🔍 Filing lost item report: {item_name}");

            // No backend endpoint for lost & found yet, simulate the delay.
            let lang = lang.clone();
            let submitting = submitting.clone();
            let my_reports = my_reports.clone();
            let tab = tab.clone();
            Timeout::new(1500, move || {
                let mut reports = (*my_reports).clone();
                reports.push(item_name);
                my_reports.set(reports);
                submitting.set(false);
                tab.set(Tab::MyReports);
                if let Some(win) = window() {
                    let _ = win.alert_with_message(&format!(
                        "✅ {}",
                        t(&lang, "submit_report")
                    ));
                }
            })
            .forget();
        })
    };

    html! {
        <div class="container">
            <button class="btn btn-text back-link" onclick={on_back}>
                {format!("← {}", t(&lang, "back_home"))}
            </button>

            <div class="card">
                <h1 class="heading-primary">{t(&lang, "lf_title")}</h1>
            </div>

            <div class="tab-bar">
                <button
                    class={classes!("tab", (*tab == Tab::Report).then_some("active"))}
                    onclick={pick_tab(Tab::Report)}
                >
                    {t(&lang, "tab_report")}
                </button>
                <button
                    class={classes!("tab", (*tab == Tab::Found).then_some("active"))}
                    onclick={pick_tab(Tab::Found)}
                >
                    {t(&lang, "tab_found")}
                </button>
                <button
                    class={classes!("tab", (*tab == Tab::MyReports).then_some("active"))}
                    onclick={pick_tab(Tab::MyReports)}
                >
                    {t(&lang, "tab_my_reports")}
                </button>
            </div>

            {
                match *tab {
                    Tab::Report => html! {
                        <div class="card">
                            <form onsubmit={on_submit}>
                                <div class="form-group">
                                    <label class="form-label" for="item-name">{t(&lang, "item_name")}</label>
                                    <input type="text" id="item-name" class="form-input" ref={name_ref} required=true />
                                </div>
                                <div class="form-group">
                                    <label class="form-label" for="item-description">{t(&lang, "item_description")}</label>
                                    <textarea id="item-description" class="form-input" rows="2" ref={description_ref} />
                                </div>
                                <div class="form-group">
                                    <label class="form-label" for="item-location">{t(&lang, "last_location")}</label>
                                    <input type="text" id="item-location" class="form-input" ref={location_ref} />
                                </div>
                                <div class="form-group">
                                    <label class="form-label" for="item-contact">{t(&lang, "contact_number")}</label>
                                    <input type="tel" id="item-contact" class="form-input" ref={contact_ref} />
                                </div>
                                <button class="btn btn-primary" type="submit" disabled={*submitting}>
                                    { if *submitting { t(&lang, "loading") } else { t(&lang, "submit_report") } }
                                </button>
                            </form>
                        </div>
                    },
                    Tab::Found => html! {
                        <>
                            { for FOUND_ITEMS.iter().map(|item| html! {
                                <div class="card found-item">
                                    <div class="option-icon">{item.icon}</div>
                                    <div>
                                        <h3 class="option-title">{item.name}</h3>
                                        <p class="help-text">
                                            {format!("{} · {} {}", item.location, t(&lang, "found_on"), item.found_on)}
                                        </p>
                                    </div>
                                    <button class="btn btn-secondary">{t(&lang, "claim_item")}</button>
                                </div>
                            }) }
                        </>
                    },
                    Tab::MyReports => html! {
                        <div class="card">
                            if my_reports.is_empty() {
                                <p class="help-text text-center">{"No reports yet"}</p>
                            } else {
                                { for my_reports.iter().map(|name| html! {
                                    <div class="report-row">
                                        <span>{name.clone()}</span>
                                        <span class="status-badge">{t(&lang, "status_pending")}</span>
                                    </div>
                                }) }
                            }
                        </div>
                    },
                }
            }

            <Footer />
        </div>
    }
}
