use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use crate::app::Route;
use crate::hooks::use_prefs;
use crate::pages::PageProps;
use crate::utils::t;

#[derive(Clone, PartialEq)]
struct ChatMessage {
    from_guest: bool,
    text: String,
}

/// Keyword-scripted assistant. First matching topic wins, checked in the
/// order guests most commonly ask.
fn scripted_reply(question: &str) -> String {
    let q = question.to_lowercase();
    let text = if q.contains("breakfast") {
        "Breakfast is served in the main restaurant from 6:30 AM to 10:30 AM. \
         Room service breakfast is available from 6:00 AM."
    } else if q.contains("airport") || q.contains("taxi") || q.contains("shuttle") {
        "Our airport shuttle leaves every hour from the main entrance. \
         A taxi takes about 25 minutes, the front desk can book one for you."
    } else if q.contains("gym") || q.contains("fitness") {
        "The fitness center is on the 3rd floor and is open 24 hours. \
         Your room key opens the door."
    } else if q.contains("wifi") || q.contains("password") || q.contains("internet") {
        "WiFi is free for all guests. Connect to \"GrandPlaza-Guest\" and use \
         your room number and last name to log in."
    } else if q.contains("pool") {
        "The pool is on the ground floor, garden side, open 6:00 AM to 10:00 PM. \
         Towels are provided."
    } else if q.contains("check-out") || q.contains("checkout") || q.contains("check out") {
        "Standard check-out is at 11:00 AM. You can arrange a late check-out \
         from the Check-Out screen in this app."
    } else if q.contains("parking") {
        "We have an underground garage, $25 per night with in-and-out access. \
         Enter from the side street."
    } else {
        "I'm sorry, I don't have an answer for that yet. The front desk \
         (dial 0 from your room phone) will be happy to help."
    };
    text.to_string()
}

#[function_component(Chatbot)]
pub fn chatbot(props: &PageProps) -> Html {
    let prefs = use_prefs();
    let lang = prefs.current_language.clone();

    let messages: UseStateHandle<Vec<ChatMessage>> = {
        let lang = lang.clone();
        use_state(move || {
            vec![ChatMessage {
                from_guest: false,
                text: t(&lang, "chat_greeting"),
            }]
        })
    };
    let input_ref = use_node_ref();
    let thread_ref = use_node_ref();

    // Keep the newest message in view.
    {
        let thread_ref = thread_ref.clone();
        use_effect_with(messages.len(), move |_| {
            if let Some(element) = thread_ref.cast::<Element>() {
                element.set_scroll_top(element.scroll_height());
            }
        });
    }

    let send = {
        let messages = messages.clone();
        Callback::from(move |question: String| {
            if question.trim().is_empty() {
                return;
            }
            let mut with_question = (*messages).clone();
            with_question.push(ChatMessage {
                from_guest: true,
                text: question.clone(),
            });
            messages.set(with_question.clone());

            // Reply after a short delay so the exchange reads naturally.
            let messages = messages.clone();
            Timeout::new(1000, move || {
                let mut with_reply = with_question;
                with_reply.push(ChatMessage {
                    from_guest: false,
                    text: scripted_reply(&question),
                });
                messages.set(with_reply);
            })
            .forget();
        })
    };

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::Home))
    };

    let on_submit = {
        let send = send.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                send.emit(input.value());
                input.set_value("");
            }
        })
    };

    let quick_question = |key: &'static str| {
        let send = send.clone();
        let lang = lang.clone();
        Callback::from(move |_e: MouseEvent| send.emit(t(&lang, key)))
    };

    html! {
        <div class="container chat-page">
            <button class="btn btn-text back-link" onclick={on_back}>
                {format!("← {}", t(&lang, "back_home"))}
            </button>

            <div class="card">
                <h1 class="heading-primary">{t(&lang, "chat_title")}</h1>
                <p class="help-text text-center">{t(&lang, "chat_assistant")}</p>
            </div>

            <div class="chat-thread" ref={thread_ref}>
                { for messages.iter().map(|message| html! {
                    <div class={classes!("chat-bubble", if message.from_guest { "guest" } else { "bot" })}>
                        {message.text.clone()}
                    </div>
                }) }
            </div>

            <div class="quick-questions">
                { for ["q_breakfast", "q_airport", "q_fitness", "q_wifi"].iter().map(|key| html! {
                    <button class="btn btn-chip" onclick={quick_question(key)}>
                        {t(&lang, key)}
                    </button>
                }) }
            </div>

            <form class="chat-input-row" onsubmit={on_submit}>
                <input
                    type="text"
                    class="form-input"
                    placeholder={t(&lang, "chat_placeholder")}
                    ref={input_ref}
                />
                <button class="btn btn-primary" type="submit">{"➤"}</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::scripted_reply;

    #[test]
    fn known_topics_get_a_scripted_answer() {
        assert!(scripted_reply("What time is breakfast?").contains("6:30 AM"));
        assert!(scripted_reply("how do I get to the AIRPORT").contains("shuttle"));
        assert!(scripted_reply("wifi password please").contains("GrandPlaza-Guest"));
    }

    #[test]
    fn unknown_questions_fall_back_to_the_front_desk() {
        assert!(scripted_reply("can you sing?").contains("front desk"));
    }

    #[test]
    fn first_matching_topic_wins() {
        // Mentions both breakfast and the pool, breakfast is checked first
        let reply = scripted_reply("is breakfast served at the pool?");
        assert!(reply.contains("Breakfast"));
    }
}
