use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use crate::app::Route;
use crate::components::Footer;
use crate::hooks::{use_prefs, use_session};
use crate::models::{order_total, Menu, MenuItem, OrderItem};
use crate::pages::PageProps;
use crate::services::dining_service::{self, OrderData, OrderLine};
use crate::utils::t;

/// Append a line with an id from a per-order counter, so the same menu item
/// can appear twice and still be removed one line at a time.
fn add_order_line(order: &mut Vec<OrderItem>, next_id: &mut u64, item: MenuItem) {
    *next_id += 1;
    order.push(OrderItem {
        line_id: next_id.to_string(),
        item,
    });
}

fn remove_order_line(order: &mut Vec<OrderItem>, line_id: &str) {
    order.retain(|line| line.line_id != line_id);
}

fn dietary_label(tags: &[String]) -> String {
    tags.join(", ")
}

#[function_component(RoomService)]
pub fn room_service(props: &PageProps) -> Html {
    let session = use_session();
    let prefs = use_prefs();
    let lang = prefs.current_language.clone();

    let menu: UseStateHandle<Option<Menu>> = use_state(|| None);
    let load_error: UseStateHandle<Option<String>> = use_state(|| None);
    let active_tab: UseStateHandle<Option<String>> = use_state(|| None);
    let order: UseStateHandle<Vec<OrderItem>> = use_state(Vec::new);
    let placing = use_state(|| false);

    {
        let menu = menu.clone();
        let load_error = load_error.clone();
        let active_tab = active_tab.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match dining_service::get_room_service_menu().await {
                    Ok(fetched) => {
                        active_tab.set(fetched.keys().next().cloned());
                        menu.set(Some(fetched));
                    }
                    Err(err) => {
                        log::error!("❌ Could not load menu: {err}");
                        load_error.set(Some(err.to_string()));
                    }
                }
            });
        });
    }

    let next_line_id = use_mut_ref(|| 0u64);

    let add_item = {
        let order = order.clone();
        let next_line_id = next_line_id.clone();
        Callback::from(move |item: MenuItem| {
            let mut next = (*order).clone();
            add_order_line(&mut next, &mut next_line_id.borrow_mut(), item);
            order.set(next);
        })
    };

    let remove_item = {
        let order = order.clone();
        Callback::from(move |line_id: String| {
            let mut next = (*order).clone();
            remove_order_line(&mut next, &line_id);
            order.set(next);
        })
    };

    let total = order_total(&order);

    let on_place_order = {
        let lang = lang.clone();
        let order = order.clone();
        let placing = placing.clone();
        let session = session.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |_e: MouseEvent| {
            if order.is_empty() || *placing {
                return;
            }

            let items: Vec<OrderLine> = order
                .iter()
                .map(|line| OrderLine {
                    id: line.item.id.clone(),
                    name: line.item.name.clone(),
                    price: line.item.price,
                    quantity: 1,
                })
                .collect();
            let data = OrderData {
                total: order_total(&order),
                items,
                special_instructions: String::new(),
                room_number: session.user.as_ref().and_then(|u| u.room_number.clone()),
            };

            let lang = lang.clone();
            let placing = placing.clone();
            let on_navigate = on_navigate.clone();
            placing.set(true);

            spawn_local(async move {
                match dining_service::place_room_service_order(&data).await {
                    Ok(response) if response.success => {
                        let eta = response
                            .data
                            .map(|c| c.estimated_delivery)
                            .unwrap_or_default();
                        if let Some(win) = window() {
                            let message = if eta.is_empty() {
                                t(&lang, "order_placed")
                            } else {
                                format!("{} {} {}", t(&lang, "order_placed"), t(&lang, "eta"), eta)
                            };
                            let _ = win.alert_with_message(&message);
                        }
                        on_navigate.emit(Route::FoodDining);
                    }
                    Ok(response) => {
                        let message = response.message.unwrap_or_else(|| t(&lang, "error"));
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&message);
                        }
                    }
                    Err(err) => {
                        log::error!("❌ Order failed: {err}");
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&t(&lang, "error"));
                        }
                    }
                }
                placing.set(false);
            });
        })
    };

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::FoodDining))
    };

    html! {
        <div class="container">
            <button class="btn btn-text back-link" onclick={on_back}>
                {format!("← {}", t(&lang, "food_title"))}
            </button>

            <div class="card">
                <h1 class="heading-primary">{t(&lang, "rs_title")}</h1>
            </div>

            {
                match (&*menu, &*load_error) {
                    (None, None) => html! {
                        <div class="card text-center">{t(&lang, "loading")}</div>
                    },
                    (None, Some(_)) => html! {
                        <div class="card error-message">{t(&lang, "error")}</div>
                    },
                    (Some(menu), _) => html! {
                        <>
                            <div class="menu-tabs">
                                { for menu.keys().map(|key| {
                                    let is_active = active_tab.as_deref() == Some(key.as_str());
                                    let onclick = {
                                        let active_tab = active_tab.clone();
                                        let key = key.clone();
                                        Callback::from(move |_e: MouseEvent| active_tab.set(Some(key.clone())))
                                    };
                                    html! {
                                        <button
                                            class={classes!("menu-tab", is_active.then_some("active"))}
                                            {onclick}
                                        >
                                            {key.clone()}
                                        </button>
                                    }
                                }) }
                            </div>

                            { for active_tab.as_ref().and_then(|key| menu.get(key)).map(|category| html! {
                                <div class="menu-section">
                                    <p class="help-text">{category.available_time.clone()}</p>
                                    { for category.items.iter().map(|item| {
                                        let onclick = {
                                            let add_item = add_item.clone();
                                            let item = item.clone();
                                            Callback::from(move |_e: MouseEvent| add_item.emit(item.clone()))
                                        };
                                        html! {
                                            <div class="menu-item card">
                                                <div class="menu-item-info">
                                                    <h3 class="option-title">{item.name.clone()}</h3>
                                                    <p class="help-text">{item.description.clone()}</p>
                                                    if let Some(dietary) = &item.dietary_info {
                                                        <span class="dietary-tag">{dietary_label(dietary)}</span>
                                                    }
                                                </div>
                                                <div class="menu-item-action">
                                                    <span class="price">{format!("${:.2}", item.price)}</span>
                                                    <button class="btn btn-small" {onclick}>{"+"}</button>
                                                </div>
                                            </div>
                                        }
                                    }) }
                                </div>
                            }) }
                        </>
                    },
                }
            }

            <div class="card order-summary">
                <h2 class="heading-secondary">{t(&lang, "your_order")}</h2>
                if order.is_empty() {
                    <p class="help-text">{t(&lang, "empty_order")}</p>
                } else {
                    { for order.iter().map(|line| {
                        let onclick = {
                            let remove_item = remove_item.clone();
                            let line_id = line.line_id.clone();
                            Callback::from(move |_e: MouseEvent| remove_item.emit(line_id.clone()))
                        };
                        html! {
                            <div class="order-line">
                                <span>{line.item.name.clone()}</span>
                                <span class="price">{format!("${:.2}", line.item.price)}</span>
                                <button class="btn btn-small btn-danger" {onclick}>{"×"}</button>
                            </div>
                        }
                    }) }
                    <div class="order-total">
                        <span>{t(&lang, "total")}</span>
                        <span class="price">{format!("${total:.2}")}</span>
                    </div>
                }

                <button
                    class="btn btn-primary"
                    disabled={order.is_empty() || *placing}
                    onclick={on_place_order}
                >
                    { if *placing { t(&lang, "loading") } else { t(&lang, "place_order") } }
                </button>
            </div>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: String::new(),
            price: 10.0,
            category: "lunch".to_string(),
            image: None,
            dietary_info: None,
        }
    }

    #[test]
    fn same_item_added_twice_gets_distinct_line_ids() {
        let mut order = Vec::new();
        let mut next_id = 0u64;
        add_order_line(&mut order, &mut next_id, item("club-sandwich"));
        add_order_line(&mut order, &mut next_id, item("club-sandwich"));

        assert_eq!(order.len(), 2);
        assert_ne!(order[0].line_id, order[1].line_id);
    }

    #[test]
    fn removing_a_line_leaves_its_duplicate_in_place() {
        let mut order = Vec::new();
        let mut next_id = 0u64;
        add_order_line(&mut order, &mut next_id, item("club-sandwich"));
        add_order_line(&mut order, &mut next_id, item("club-sandwich"));

        let first_id = order[0].line_id.clone();
        remove_order_line(&mut order, &first_id);

        assert_eq!(order.len(), 1);
        assert_ne!(order[0].line_id, first_id);
        assert_eq!(order[0].item.id, "club-sandwich");
    }

    #[test]
    fn dietary_tags_are_comma_separated() {
        let tags = vec!["Vegetarian".to_string(), "Gluten-Free".to_string()];
        assert_eq!(dietary_label(&tags), "Vegetarian, Gluten-Free");
        assert_eq!(dietary_label(&["Vegan".to_string()]), "Vegan");
    }
}
