use yew::prelude::*;

/// Banner on the home screen for an in-flight request or active DND.
#[derive(Properties, PartialEq)]
pub struct StatusNotificationProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub time: AttrValue,
    #[prop_or(AttrValue::from("View"))]
    pub action_text: AttrValue,
    pub on_action: Callback<()>,
}

#[function_component(StatusNotification)]
pub fn status_notification(props: &StatusNotificationProps) -> Html {
    let onclick = {
        let cb = props.on_action.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="status-notification">
            <div class="status-icon">{props.icon.clone()}</div>
            <div class="status-content">
                <div class="status-title">{props.title.clone()}</div>
                <div class="status-time">{props.time.clone()}</div>
            </div>
            <button class="btn btn-text" {onclick}>{props.action_text.clone()}</button>
        </div>
    }
}
