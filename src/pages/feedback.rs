use gloo_timers::callback::Timeout;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::Route;
use crate::components::Footer;
use crate::hooks::use_prefs;
use crate::pages::PageProps;
use crate::utils::t;

const CATEGORIES: [(&str, &str); 6] = [
    ("overall", "rate_overall"),
    ("room", "rate_room"),
    ("service", "rate_service"),
    ("cleanliness", "rate_cleanliness"),
    ("food", "rate_food"),
    ("value", "rate_value"),
];

const HIGHLIGHT_TAGS: [&str; 6] = [
    "Comfortable room",
    "Friendly staff",
    "Great food",
    "Clean facilities",
    "Good value",
    "Quiet location",
];

#[function_component(Feedback)]
pub fn feedback(props: &PageProps) -> Html {
    let prefs = use_prefs();
    let lang = prefs.current_language.clone();

    // Star rating per category, keyed by CATEGORIES position.
    let ratings: UseStateHandle<[u8; 6]> = use_state(|| [0; 6]);
    let selected_tags: UseStateHandle<Vec<&'static str>> = use_state(Vec::new);
    let submitting = use_state(|| false);

    let title_ref = use_node_ref();
    let review_ref = use_node_ref();
    let anonymous_ref = use_node_ref();

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::Home))
    };

    let rate = |category: usize, stars: u8| {
        let ratings = ratings.clone();
        Callback::from(move |_e: MouseEvent| {
            let mut next = *ratings;
            next[category] = stars;
            ratings.set(next);
        })
    };

    let toggle_tag = |tag: &'static str| {
        let selected_tags = selected_tags.clone();
        Callback::from(move |_e: MouseEvent| {
            let mut next = (*selected_tags).clone();
            match next.iter().position(|t| *t == tag) {
                Some(index) => {
                    next.remove(index);
                }
                None => next.push(tag),
            }
            selected_tags.set(next);
        })
    };

    let on_submit = {
        let lang = lang.clone();
        let submitting = submitting.clone();
        let ratings = ratings.clone();
        let selected_tags = selected_tags.clone();
        let on_navigate = props.on_navigate.clone();
        let title_ref = title_ref.clone();
        let review_ref = review_ref.clone();
        let anonymous_ref = anonymous_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let title = title_ref
                .cast::<HtmlInputElement>()
                .map(|el| el.value())
                .unwrap_or_default();
            let review = review_ref
                .cast::<HtmlTextAreaElement>()
                .map(|el| el.value())
                .unwrap_or_default();
            let anonymous = anonymous_ref
                .cast::<HtmlInputElement>()
                .map(|el| el.checked())
                .unwrap_or(false);

            submitting.set(true);
            log::info!(
                "💬 Submitting review \"{title}\" (ratings {:?}, tags {:?}, anonymous {anonymous}, {} chars)",
                *ratings,
                *selected_tags,
                review.len()
            );

            // No backend endpoint for reviews yet, simulate the delay.
            let lang = lang.clone();
            let submitting = submitting.clone();
            let on_navigate = on_navigate.clone();
            Timeout::new(1500, move || {
                submitting.set(false);
                if let Some(win) = window() {
                    let _ = win.alert_with_message(&format!("✅ {}", t(&lang, "submit_review")));
                }
                on_navigate.emit(Route::Home);
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
                <h1 class="heading-primary">{t(&lang, "fb_title")}</h1>
                <p class="help-text text-center">{t(&lang, "fb_subtitle")}</p>
            </div>

            <div class="card">
                <form onsubmit={on_submit}>
                    { for CATEGORIES.iter().enumerate().map(|(index, (_, key))| html! {
                        <div class="form-group rating-row">
                            <label class="form-label">{t(&lang, key)}</label>
                            <div class="stars">
                                { for (1..=5u8).map(|stars| {
                                    let filled = ratings[index] >= stars;
                                    html! {
                                        <button
                                            type="button"
                                            class={classes!("star", filled.then_some("filled"))}
                                            onclick={rate(index, stars)}
                                        >
                                            { if filled { "★" } else { "☆" } }
                                        </button>
                                    }
                                }) }
                            </div>
                        </div>
                    }) }

                    <div class="form-group">
                        <label class="form-label">{t(&lang, "what_liked")}</label>
                        <div class="tag-chips">
                            { for HIGHLIGHT_TAGS.iter().map(|tag| {
                                let active = selected_tags.contains(tag);
                                html! {
                                    <button
                                        type="button"
                                        class={classes!("btn", "btn-chip", active.then_some("active"))}
                                        onclick={toggle_tag(*tag)}
                                    >
                                        {*tag}
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="review-title">{t(&lang, "review_title")}</label>
                        <input type="text" id="review-title" class="form-input" ref={title_ref} />
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="review-text">{t(&lang, "your_review")}</label>
                        <textarea
                            id="review-text"
                            class="form-input"
                            rows="4"
                            placeholder={t(&lang, "what_liked")}
                            ref={review_ref}
                        />
                    </div>

                    <div class="form-group checkbox-group">
                        <label class="form-label">
                            <input type="checkbox" ref={anonymous_ref} />
                            {t(&lang, "anonymous")}
                        </label>
                    </div>

                    <button class="btn btn-primary" type="submit" disabled={*submitting}>
                        { if *submitting { t(&lang, "loading") } else { t(&lang, "submit_review") } }
                    </button>
                </form>
            </div>

            <Footer />
        </div>
    }
}
