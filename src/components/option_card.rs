use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OptionCardProps {
    pub id: AttrValue,
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    pub on_click: Callback<()>,
}

#[function_component(OptionCard)]
pub fn option_card(props: &OptionCardProps) -> Html {
    let onclick = {
        let cb = props.on_click.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="option-card" id={props.id.clone()} {onclick}>
            <div class="option-icon">{props.icon.clone()}</div>
            <h3 class="option-title">{props.title.clone()}</h3>
            <p class="option-description">{props.description.clone()}</p>
        </div>
    }
}
