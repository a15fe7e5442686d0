use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>{"Need help? Call reception: 0"}</p>
            <p class="footer-small">{"Grand Plaza Hotel · Guest Assistant"}</p>
        </footer>
    }
}
