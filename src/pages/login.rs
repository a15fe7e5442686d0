use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::app::Route;
use crate::components::{Footer, LogoPlaceholder};
use crate::hooks::{self, use_session};
use crate::pages::PageProps;

#[function_component(Login)]
pub fn login(props: &PageProps) -> Html {
    let session = use_session();
    let code_ref = use_node_ref();

    let on_submit = {
        let session = session.clone();
        let code_ref = code_ref.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(input) = code_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let reservation_code = input.value();
            if reservation_code.trim().is_empty() {
                return;
            }

            let session = session.clone();
            let on_navigate = on_navigate.clone();
            spawn_local(async move {
                let outcome = hooks::login(session, reservation_code).await;
                if outcome.success {
                    on_navigate.emit(Route::CheckIn);
                }
            });
        })
    };

    let on_forgot_code = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(win) = window() {
            let _ = win.alert_with_message(
                "You can find your code in your booking confirmation email or get it at the reception.",
            );
        }
    });

    html! {
        <div class="container">
            <div class="logo-area">
                <LogoPlaceholder />
            </div>

            <div class="card">
                <h1 class="heading-primary">{"Welcome"}</h1>
                <p class="help-text text-center">{"Please enter your reservation code to continue"}</p>

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <input
                            type="text"
                            id="reservation-code"
                            class="form-input"
                            placeholder="Enter your code"
                            ref={code_ref}
                            required=true
                        />
                        if let Some(error) = &session.error {
                            <div class="error-message">{error.clone()}</div>
                        }
                    </div>

                    <button class="btn btn-primary" type="submit" disabled={session.loading}>
                        { if session.loading { "Logging in..." } else { "Login" } }
                    </button>
                </form>

                <div class="text-center">
                    <a href="#" class="link" onclick={on_forgot_code}>
                        {"Where can I find my code?"}
                    </a>
                </div>
            </div>

            <div class="card">
                <h2 class="heading-secondary">{"First time here?"}</h2>
                <p class="help-text">
                    {"Your reservation code was sent to you in your booking confirmation. \
                      If you're checking in today, you can also get your code at the reception."}
                </p>
            </div>

            <Footer />
        </div>
    }
}
