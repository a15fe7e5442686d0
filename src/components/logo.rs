use yew::prelude::*;

#[function_component(LogoPlaceholder)]
pub fn logo_placeholder() -> Html {
    html! {
        <div class="logo-placeholder">
            <div class="logo-icon">{"🏨"}</div>
            <div class="logo-text">{"Grand Plaza Hotel"}</div>
        </div>
    }
}
