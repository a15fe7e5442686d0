use yew::prelude::*;

use crate::app::Route;
use crate::components::Footer;
use crate::hooks::use_prefs;
use crate::pages::PageProps;
use crate::utils::t;

struct Amenity {
    icon: &'static str,
    name: &'static str,
    description: &'static str,
    hours: &'static str,
    location: &'static str,
}

const AMENITIES: [Amenity; 6] = [
    Amenity {
        icon: "🏊",
        name: "Swimming Pool",
        description: "Heated outdoor pool with sun loungers and towel service",
        hours: "6:00 AM - 10:00 PM",
        location: "Ground floor, garden side",
    },
    Amenity {
        icon: "💆",
        name: "Spa & Wellness",
        description: "Massages, sauna and beauty treatments. Booking recommended",
        hours: "9:00 AM - 9:00 PM",
        location: "2nd floor",
    },
    Amenity {
        icon: "🏋️",
        name: "Fitness Center",
        description: "Cardio machines, free weights and yoga mats",
        hours: "24 hours",
        location: "3rd floor",
    },
    Amenity {
        icon: "🍸",
        name: "Rooftop Bar",
        description: "Cocktails and light bites with a city view",
        hours: "5:00 PM - 1:00 AM",
        location: "Rooftop, 12th floor",
    },
    Amenity {
        icon: "💼",
        name: "Business Center",
        description: "Meeting rooms, printing and video conferencing",
        hours: "7:00 AM - 8:00 PM",
        location: "Mezzanine",
    },
    Amenity {
        icon: "🧒",
        name: "Kids Club",
        description: "Supervised activities for children aged 4 to 12",
        hours: "10:00 AM - 6:00 PM",
        location: "Ground floor, east wing",
    },
];

#[function_component(Amenities)]
pub fn amenities(props: &PageProps) -> Html {
    let prefs = use_prefs();
    let lang = prefs.current_language.clone();

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::Home))
    };

    html! {
        <div class="container">
            <button class="btn btn-text back-link" onclick={on_back}>
                {format!("← {}", t(&lang, "back_home"))}
            </button>

            <div class="card">
                <h1 class="heading-primary">{t(&lang, "amenities_title")}</h1>
                <p class="help-text text-center">{t(&lang, "amenities_subtitle")}</p>
            </div>

            { for AMENITIES.iter().map(|amenity| html! {
                <div class="card amenity-card">
                    <div class="option-icon">{amenity.icon}</div>
                    <h2 class="heading-secondary">{amenity.name}</h2>
                    <p class="help-text">{amenity.description}</p>
                    <p class="amenity-detail">
                        <strong>{format!("{}: ", t(&lang, "hours"))}</strong>{amenity.hours}
                    </p>
                    <p class="amenity-detail">
                        <strong>{format!("{}: ", t(&lang, "location"))}</strong>{amenity.location}
                    </p>
                </div>
            }) }

            <Footer />
        </div>
    }
}
