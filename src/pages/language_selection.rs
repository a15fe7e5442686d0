use yew::prelude::*;

use crate::app::Route;
use crate::components::{Footer, LogoPlaceholder};
use crate::hooks::{select_language, use_prefs};
use crate::pages::PageProps;
use crate::utils::i18n::Language;

#[function_component(LanguageSelection)]
pub fn language_selection(props: &PageProps) -> Html {
    let prefs = use_prefs();

    let on_continue = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::Login))
    };

    let buttons = Language::ALL.iter().map(|language| {
        let code = language.code();
        let class = if prefs.current_language == code {
            "language-btn active"
        } else {
            "language-btn"
        };
        let onclick = {
            let prefs = prefs.clone();
            Callback::from(move |_e: MouseEvent| {
                select_language(&prefs, code.to_string());
            })
        };
        html! {
            <div key={code} {class} {onclick}>{language.native_name()}</div>
        }
    });

    html! {
        <div class="container">
            <div class="logo-area">
                <LogoPlaceholder />
            </div>

            <div class="card">
                <h1 class="heading-primary">{"Select Your Language"}</h1>

                <div class="language-selector">
                    { for buttons }
                </div>

                <button class="btn btn-primary" onclick={on_continue}>{"Continue"}</button>
            </div>

            <Footer />
        </div>
    }
}
