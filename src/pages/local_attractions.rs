use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::app::Route;
use crate::components::Footer;
use crate::hooks::use_prefs;
use crate::pages::PageProps;
use crate::utils::t;

#[derive(Clone, Copy, PartialEq)]
struct Attraction {
    icon: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    /// Display string, e.g. "0.3 km". Filtering parses the leading number.
    distance: &'static str,
    rating: f32,
    review_count: u32,
}

const ATTRACTIONS: [Attraction; 6] = [
    Attraction {
        icon: "🏛️",
        name: "City Museum",
        description: "Art and history collections in a landmark building",
        category: "culture",
        distance: "0.8 km",
        rating: 4.6,
        review_count: 2314,
    },
    Attraction {
        icon: "🌳",
        name: "Riverside Park",
        description: "Walking trails, playgrounds and weekend markets",
        category: "outdoors",
        distance: "0.3 km",
        rating: 4.8,
        review_count: 1892,
    },
    Attraction {
        icon: "🛍️",
        name: "Grand Shopping Mall",
        description: "120 stores, food court and a cinema",
        category: "shopping",
        distance: "1.5 km",
        rating: 4.2,
        review_count: 5410,
    },
    Attraction {
        icon: "🎭",
        name: "Opera House",
        description: "Evening performances, guided tours during the day",
        category: "culture",
        distance: "2.1 km",
        rating: 4.7,
        review_count: 987,
    },
    Attraction {
        icon: "🍜",
        name: "Old Town Food Street",
        description: "Local street food and night market",
        category: "food",
        distance: "0.6 km",
        rating: 4.5,
        review_count: 3206,
    },
    Attraction {
        icon: "⛰️",
        name: "Sunset Viewpoint",
        description: "Panoramic city views, best an hour before dusk",
        category: "outdoors",
        distance: "4.2 km",
        rating: 4.9,
        review_count: 756,
    },
];

struct Transport {
    icon: &'static str,
    name: &'static str,
    detail: &'static str,
}

const TRANSPORT: [Transport; 3] = [
    Transport {
        icon: "🚇",
        name: "Metro",
        detail: "Central Station is 200 m from the lobby. Runs 5:30 AM - midnight",
    },
    Transport {
        icon: "🚕",
        name: "Taxi",
        detail: "The front desk can call one for you, pickup in about 5 minutes",
    },
    Transport {
        icon: "🚲",
        name: "Bike Rental",
        detail: "City bikes at the corner stand, first 30 minutes free",
    },
];

/// Threshold below which an attraction counts as "nearby".
const NEARBY_KM: f64 = 1.0;

/// Parse the leading kilometre figure out of a display distance like
/// "0.8 km". Returns `None` when the string does not start with a number.
fn parse_distance_km(distance: &str) -> Option<f64> {
    let numeric: String = distance
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse().ok()
}

fn passes_filters(attraction: &Attraction, distance_filter: &str, category_filter: &str) -> bool {
    let distance_ok = match distance_filter {
        "nearby" => parse_distance_km(attraction.distance)
            .map(|km| km < NEARBY_KM)
            .unwrap_or(false),
        _ => true,
    };
    let category_ok = category_filter == "all" || attraction.category == category_filter;
    distance_ok && category_ok
}

#[function_component(LocalAttractions)]
pub fn local_attractions(props: &PageProps) -> Html {
    let prefs = use_prefs();
    let lang = prefs.current_language.clone();

    let distance_filter = use_state(|| "all".to_string());
    let category_filter = use_state(|| "all".to_string());

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::Home))
    };

    let on_distance_change = {
        let distance_filter = distance_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            distance_filter.set(select.value());
        })
    };

    let on_category_change = {
        let category_filter = category_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category_filter.set(select.value());
        })
    };

    let visible: Vec<&Attraction> = ATTRACTIONS
        .iter()
        .filter(|a| passes_filters(a, &distance_filter, &category_filter))
        .collect();

    html! {
        <div class="container">
            <button class="btn btn-text back-link" onclick={on_back}>
                {format!("← {}", t(&lang, "back_home"))}
            </button>

            <div class="card">
                <h1 class="heading-primary">{t(&lang, "attractions_title")}</h1>
                <p class="help-text text-center">{t(&lang, "attractions_discover")}</p>
            </div>

            <div class="card filter-bar">
                <div class="form-group">
                    <label class="form-label" for="filter-distance">{t(&lang, "filter_distance")}</label>
                    <select id="filter-distance" class="form-input" onchange={on_distance_change}>
                        <option value="all" selected={*distance_filter == "all"}>{t(&lang, "filter_all")}</option>
                        <option value="nearby" selected={*distance_filter == "nearby"}>{t(&lang, "filter_nearby")}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label class="form-label" for="filter-category">{t(&lang, "filter_category")}</label>
                    <select id="filter-category" class="form-input" onchange={on_category_change}>
                        <option value="all" selected={*category_filter == "all"}>{t(&lang, "filter_all")}</option>
                        <option value="culture">{"Culture"}</option>
                        <option value="outdoors">{"Outdoors"}</option>
                        <option value="shopping">{"Shopping"}</option>
                        <option value="food">{"Food"}</option>
                    </select>
                </div>
            </div>

            { for visible.iter().map(|attraction| html! {
                <div class="card attraction-card">
                    <div class="option-icon">{attraction.icon}</div>
                    <h2 class="heading-secondary">{attraction.name}</h2>
                    <p class="help-text">{attraction.description}</p>
                    <p class="attraction-meta">
                        {format!(
                            "📍 {} · ⭐ {:.1} ({} {})",
                            attraction.distance,
                            attraction.rating,
                            attraction.review_count,
                            t(&lang, "reviews"),
                        )}
                    </p>
                    <button class="btn btn-secondary">{t(&lang, "get_directions")}</button>
                </div>
            }) }

            <div class="card">
                <h2 class="heading-secondary">{t(&lang, "transport_title")}</h2>
                { for TRANSPORT.iter().map(|transport| html! {
                    <div class="transport-row">
                        <span class="transport-icon">{transport.icon}</span>
                        <div>
                            <strong>{transport.name}</strong>
                            <p class="help-text">{transport.detail}</p>
                        </div>
                    </div>
                }) }
            </div>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_kilometre_figure() {
        assert_eq!(parse_distance_km("0.8 km"), Some(0.8));
        assert_eq!(parse_distance_km("4.2 km"), Some(4.2));
        assert_eq!(parse_distance_km("unknown"), None);
    }

    #[test]
    fn nearby_filter_keeps_sub_kilometre_entries_only() {
        let park = &ATTRACTIONS[1]; // 0.3 km
        let mall = &ATTRACTIONS[2]; // 1.5 km
        assert!(passes_filters(park, "nearby", "all"));
        assert!(!passes_filters(mall, "nearby", "all"));
    }

    #[test]
    fn category_filter_is_independent_of_distance() {
        let viewpoint = &ATTRACTIONS[5]; // outdoors, 4.2 km
        assert!(passes_filters(viewpoint, "all", "outdoors"));
        assert!(!passes_filters(viewpoint, "nearby", "outdoors"));
        assert!(!passes_filters(viewpoint, "all", "food"));
    }
}
