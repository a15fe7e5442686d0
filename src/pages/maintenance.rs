use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::Route;
use crate::components::Footer;
use crate::hooks::{self, use_prefs};
use crate::models::{MaintenanceRequest, Priority};
use crate::pages::PageProps;
use crate::services::housekeeping_service::{self, MaintenanceRequestData};
use crate::state::ActiveRequest;
use crate::utils::t;

/// Short form of the free-text description for the home screen banner.
fn summarize_issue(description: &str) -> String {
    let trimmed = description.trim();
    if trimmed.chars().count() <= 30 {
        trimmed.to_string()
    } else {
        let short: String = trimmed.chars().take(30).collect();
        format!("{short}...")
    }
}

#[function_component(Maintenance)]
pub fn maintenance(props: &PageProps) -> Html {
    let prefs = use_prefs();
    let lang = prefs.current_language.clone();

    let submitting = use_state(|| false);
    let priority = use_state(|| Priority::Medium);

    let category_ref = use_node_ref();
    let description_ref = use_node_ref();
    let auth_entry_ref = use_node_ref();
    let contact_ref = use_node_ref();

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::Home))
    };

    let pick_priority = |value: Priority| {
        let priority = priority.clone();
        Callback::from(move |_e: MouseEvent| priority.set(value))
    };

    let on_submit = {
        let lang = lang.clone();
        let prefs = prefs.clone();
        let submitting = submitting.clone();
        let priority = priority.clone();
        let on_navigate = props.on_navigate.clone();
        let category_ref = category_ref.clone();
        let description_ref = description_ref.clone();
        let auth_entry_ref = auth_entry_ref.clone();
        let contact_ref = contact_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let category = category_ref
                .cast::<HtmlSelectElement>()
                .map(|el| el.value())
                .unwrap_or_default();
            let description = description_ref
                .cast::<HtmlTextAreaElement>()
                .map(|el| el.value())
                .unwrap_or_default();
            if category.is_empty() || description.trim().is_empty() {
                return;
            }
            let data = MaintenanceRequestData {
                category,
                description: description.clone(),
                priority: *priority,
                not_present: auth_entry_ref
                    .cast::<HtmlInputElement>()
                    .map(|el| el.checked())
                    .unwrap_or(false),
                contact_method: contact_ref
                    .cast::<HtmlSelectElement>()
                    .map(|el| el.value())
                    .unwrap_or_default(),
            };

            let lang = lang.clone();
            let prefs = prefs.clone();
            let submitting = submitting.clone();
            let on_navigate = on_navigate.clone();
            submitting.set(true);

            spawn_local(async move {
                match housekeeping_service::request_maintenance(&data).await {
                    Ok(response) if response.success => {
                        let request = response.data.unwrap_or_else(|| MaintenanceRequest {
                            id: format!("{:.0}", js_sys::Date::now()),
                            status: "open".to_string(),
                            requested: chrono::Local::now().format("%H:%M").to_string(),
                            issue: summarize_issue(&data.description),
                            priority: data.priority,
                            eta: None,
                        });
                        hooks::add_active_request(&prefs, ActiveRequest::Maintenance(request));
                        on_navigate.emit(Route::Home);
                    }
                    Ok(response) => {
                        let message = response.message.unwrap_or_else(|| t(&lang, "error"));
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&message);
                        }
                    }
                    Err(err) => {
                        log::error!("❌ Maintenance report failed: {err}");
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
                <h1 class="heading-primary">{t(&lang, "maint_title")}</h1>
                <p class="help-text text-center">{t(&lang, "report_issues")}</p>
            </div>

            if let Some(request) = &prefs.active_maintenance {
                <div class="card">
                    <h2 class="heading-secondary">{t(&lang, "open_requests")}</h2>
                    <p class="help-text">
                        {format!("{} · {} {} · {}", request.issue, t(&lang, "requested"), request.requested, request.status)}
                    </p>
                </div>
            }

            <div class="card">
                <h2 class="heading-secondary">{t(&lang, "report_issue")}</h2>
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label class="form-label" for="issue-category">{t(&lang, "issue_category")}</label>
                        <select id="issue-category" class="form-input" ref={category_ref} required=true>
                            <option value="" selected=true disabled=true>{t(&lang, "select_category")}</option>
                            <option value="ac-heating">{t(&lang, "cat_ac")}</option>
                            <option value="electrical">{t(&lang, "cat_electrical")}</option>
                            <option value="plumbing">{t(&lang, "cat_plumbing")}</option>
                            <option value="tv">{t(&lang, "cat_tv")}</option>
                            <option value="internet">{t(&lang, "cat_internet")}</option>
                            <option value="furniture">{t(&lang, "cat_furniture")}</option>
                            <option value="other">{t(&lang, "cat_other")}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="issue-description">{t(&lang, "issue_description")}</label>
                        <textarea
                            id="issue-description"
                            class="form-input"
                            rows="3"
                            placeholder={t(&lang, "description_prompt")}
                            ref={description_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label">{t(&lang, "priority")}</label>
                        <div class="priority-buttons">
                            { for [
                                (Priority::Low, "priority_low"),
                                (Priority::Medium, "priority_medium"),
                                (Priority::High, "priority_high"),
                            ].iter().map(|(value, key)| html! {
                                <button
                                    type="button"
                                    class={classes!("btn", "btn-toggle", (*priority == *value).then_some("active"))}
                                    onclick={pick_priority(*value)}
                                >
                                    {t(&lang, key)}
                                </button>
                            }) }
                        </div>
                    </div>

                    <div class="form-group checkbox-group">
                        <label class="form-label">
                            <input type="checkbox" ref={auth_entry_ref} />
                            {t(&lang, "auth_entry")}
                        </label>
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="contact-method">{t(&lang, "contact_method")}</label>
                        <select id="contact-method" class="form-input" ref={contact_ref}>
                            <option value="app">{t(&lang, "contact_app")}</option>
                            <option value="phone">{t(&lang, "contact_phone")}</option>
                            <option value="sms">{t(&lang, "contact_sms")}</option>
                            <option value="email">{t(&lang, "contact_email")}</option>
                        </select>
                    </div>

                    <button class="btn btn-primary" type="submit" disabled={*submitting}>
                        { if *submitting { t(&lang, "loading") } else { t(&lang, "submit_request") } }
                    </button>
                </form>
            </div>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::summarize_issue;

    #[test]
    fn short_descriptions_pass_through() {
        assert_eq!(summarize_issue("AC not cooling"), "AC not cooling");
        assert_eq!(summarize_issue("  padded  "), "padded");
    }

    #[test]
    fn long_descriptions_are_cut_at_thirty_chars() {
        let long = "The air conditioning unit rattles loudly every night";
        let summary = summarize_issue(long);
        assert_eq!(summary.chars().count(), 33);
        assert!(summary.ends_with("..."));
        assert!(summary.starts_with("The air conditioning unit ratt"));
    }
}
