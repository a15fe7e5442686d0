use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::Route;
use crate::components::Footer;
use crate::hooks::use_prefs;
use crate::pages::PageProps;
use crate::utils::t;

#[derive(Clone, Copy, PartialEq)]
struct MapLocation {
    icon: &'static str,
    /// Translation key for the location label.
    key: &'static str,
    floor: i8,
}

const LOCATIONS: [MapLocation; 6] = [
    MapLocation { icon: "🏊", key: "loc_pool", floor: 0 },
    MapLocation { icon: "🍽️", key: "loc_restaurant", floor: 0 },
    MapLocation { icon: "🚻", key: "loc_restrooms", floor: 0 },
    MapLocation { icon: "🛏️", key: "loc_your_room", floor: 3 },
    MapLocation { icon: "🚪", key: "loc_exit", floor: 0 },
    MapLocation { icon: "🛗", key: "loc_elevator", floor: 0 },
];

/// Case-insensitive substring match against the translated label.
fn matches_query(label: &str, query: &str) -> bool {
    query.trim().is_empty() || label.to_lowercase().contains(&query.trim().to_lowercase())
}

#[function_component(HotelMap)]
pub fn hotel_map(props: &PageProps) -> Html {
    let prefs = use_prefs();
    let lang = prefs.current_language.clone();

    let query = use_state(String::new);
    let selected: UseStateHandle<Option<&'static str>> = use_state(|| None);

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::Home))
    };

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let visible: Vec<(MapLocation, String)> = LOCATIONS
        .iter()
        .map(|loc| (*loc, t(&lang, loc.key)))
        .filter(|(_, label)| matches_query(label, &query))
        .collect();

    html! {
        <div class="container">
            <button class="btn btn-text back-link" onclick={on_back}>
                {format!("← {}", t(&lang, "back_home"))}
            </button>

            <div class="card">
                <h1 class="heading-primary">{t(&lang, "map_title")}</h1>
                <input
                    type="search"
                    class="form-input"
                    placeholder={t(&lang, "map_search")}
                    value={(*query).clone()}
                    {oninput}
                />
            </div>

            <div class="card map-canvas">
                // Stylized floor plan, not to scale.
                <div class="map-grid">
                    { for visible.iter().map(|(loc, label)| {
                        let is_selected = *selected == Some(loc.key);
                        let onclick = {
                            let selected = selected.clone();
                            let key = loc.key;
                            Callback::from(move |_e: MouseEvent| selected.set(Some(key)))
                        };
                        html! {
                            <div
                                class={classes!("map-pin", is_selected.then_some("selected"))}
                                {onclick}
                            >
                                <span class="map-pin-icon">{loc.icon}</span>
                                <span class="map-pin-label">{label.clone()}</span>
                                <span class="map-pin-floor">
                                    {format!("{} {}", t(&lang, "floor"), loc.floor)}
                                </span>
                            </div>
                        }
                    }) }
                </div>
            </div>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query("Pool", ""));
        assert!(matches_query("Pool", "   "));
    }

    #[test]
    fn query_matches_case_insensitive_substring() {
        assert!(matches_query("Restaurant", "rest"));
        assert!(matches_query("Restaurant", "TAUR"));
        assert!(!matches_query("Restaurant", "pool"));
    }
}
