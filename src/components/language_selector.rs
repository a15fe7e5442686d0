use yew::prelude::*;

use crate::hooks::{select_language, use_prefs};
use crate::utils::i18n::Language;

/// Floating selector shown on most pages so the guest can switch language
/// without going back to the selection screen.
#[function_component(FloatingLanguageSelector)]
pub fn floating_language_selector() -> Html {
    let prefs = use_prefs();
    let open = use_state(|| false);

    let toggle_open = {
        let open = open.clone();
        Callback::from(move |_e: MouseEvent| open.set(!*open))
    };

    let current = Language::from_code(&prefs.current_language);

    let options = Language::ALL.iter().map(|language| {
        let code = language.code();
        let onclick = {
            let prefs = prefs.clone();
            let open = open.clone();
            Callback::from(move |_e: MouseEvent| {
                select_language(&prefs, code.to_string());
                open.set(false);
            })
        };
        let class = if *language == current {
            "language-option active"
        } else {
            "language-option"
        };
        html! {
            <div key={code} {class} {onclick}>{language.native_name()}</div>
        }
    });

    html! {
        <div class="floating-language-selector">
            <button class="language-toggle" onclick={toggle_open}>
                {current.code().to_uppercase()}
            </button>
            if *open {
                <div class="language-dropdown">
                    { for options }
                </div>
            }
        </div>
    }
}
