// ============================================================================
// INTERNATIONALIZATION MODULE
// ============================================================================

use std::collections::HashMap;

/// Languages offered on the selection screen. Unknown codes silently fall
/// back to English wherever display logic looks a text up.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Chinese,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Chinese,
        Language::Japanese,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "es" => Language::Spanish,
            "fr" => Language::French,
            "de" => Language::German,
            "zh" => Language::Chinese,
            "ja" => Language::Japanese,
            _ => Language::English,
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Chinese => "中文",
            Language::Japanese => "日本語",
        }
    }
}

/// Look up a text for the given language code. Missing keys fall back to the
/// English table, then to the key itself.
pub fn t(lang_code: &str, key: &str) -> String {
    let lang = Language::from_code(lang_code);
    if let Some(table) = get_translations(lang) {
        if let Some(text) = table.get(key) {
            return (*text).to_string();
        }
    }
    english()
        .get(key)
        .map(|s| (*s).to_string())
        .unwrap_or_else(|| key.to_string())
}

fn get_translations(lang: Language) -> Option<HashMap<&'static str, &'static str>> {
    match lang {
        Language::Spanish => Some(spanish()),
        Language::French => Some(french()),
        // German, Chinese and Japanese resources are not translated yet and
        // fall back to English.
        _ => None,
    }
}

fn english() -> HashMap<&'static str, &'static str> {
    let mut texts = HashMap::new();

    // Common
    texts.insert("back_home", "Back to Home");
    texts.insert("submit", "Submit");
    texts.insert("loading", "Loading...");
    texts.insert("error", "Something went wrong. Please try again.");
    texts.insert("cancel", "Cancel");

    // Status notifications
    texts.insert("requested", "Requested at");
    texts.insert("in_progress", "In progress");
    texts.insert("eta", "ETA");
    texts.insert("minutes", "minutes");
    texts.insert("update", "Update");
    texts.insert("cleaning_progress", "Room Cleaning in Progress");
    texts.insert("dnd_enabled", "Do Not Disturb Enabled");
    texts.insert("disable", "Disable");

    // Food & dining
    texts.insert("food_title", "Food & Dining");
    texts.insert("food_subtitle", "How would you like to enjoy your meal?");
    texts.insert("current_orders", "Current Orders");
    texts.insert("room_service", "Room Service");
    texts.insert("room_service_desc", "Order food and drinks to your room");
    texts.insert("select_room_service", "Order Room Service");
    texts.insert("restaurant", "Restaurant");
    texts.insert("restaurant_desc", "Browse our restaurant menu");
    texts.insert("select_restaurant", "View Menu");
    texts.insert("reservations", "Dining Reservations");
    texts.insert("reservations_desc", "Book a table at our restaurant");
    texts.insert("make_reservation", "Make Reservation");

    // Room service
    texts.insert("rs_title", "Room Service");
    texts.insert("your_order", "Your Order");
    texts.insert("empty_order", "Your order is empty");
    texts.insert("total", "Total");
    texts.insert("place_order", "Place Order");
    texts.insert("order_placed", "Your order has been placed!");

    // Amenities
    texts.insert("amenities_title", "Hotel Amenities");
    texts.insert("amenities_subtitle", "Discover our facilities and services");
    texts.insert("hours", "Hours");
    texts.insert("location", "Location");

    // Hotel map
    texts.insert("map_title", "Hotel Map");
    texts.insert("map_search", "Search for a location...");
    texts.insert("floor", "Floor");
    texts.insert("loc_pool", "Pool");
    texts.insert("loc_restaurant", "Restaurant");
    texts.insert("loc_restrooms", "Restrooms");
    texts.insert("loc_your_room", "Your Room");
    texts.insert("loc_exit", "Exit");
    texts.insert("loc_elevator", "Elevator");

    // Local attractions
    texts.insert("attractions_title", "Local Attractions");
    texts.insert("attractions_discover", "Discover places & transportation");
    texts.insert("filter_distance", "Distance");
    texts.insert("filter_category", "Category");
    texts.insert("filter_all", "All");
    texts.insert("filter_nearby", "Nearby");
    texts.insert("get_directions", "Get Directions");
    texts.insert("transport_title", "Getting Around");
    texts.insert("reviews", "reviews");

    // Clean room
    texts.insert("clean_title", "Clean Room");
    texts.insert("current_request", "Current Request");
    texts.insert("request_housekeeping", "Request Housekeeping");
    texts.insert("available_hours", "Housekeeping is available from 8:00 AM to 8:00 PM");
    texts.insert("service_type", "Service Type");
    texts.insert("select_service_type", "Select a service type");
    texts.insert("service_full", "Full Cleaning");
    texts.insert("service_light", "Light Touch-up");
    texts.insert("service_turndown", "Turndown Service");
    texts.insert("service_towels", "Fresh Towels");
    texts.insert("service_supplies", "Restock Supplies");
    texts.insert("preferred_time", "Preferred Time");
    texts.insert("select_time", "Select a time");
    texts.insert("time_asap", "As soon as possible");
    texts.insert("time_morning", "Morning (8 AM - 12 PM)");
    texts.insert("time_afternoon", "Afternoon (12 PM - 4 PM)");
    texts.insert("time_evening", "Evening (4 PM - 8 PM)");
    texts.insert("special_instructions", "Special Instructions");
    texts.insert("special_instructions_prompt", "Anything we should know?");
    texts.insert("not_present", "I will not be present during cleaning");
    texts.insert("submit_request", "Submit Request");
    texts.insert("regular_schedule", "Regular Schedule");
    texts.insert("scheduled_days", "Your room is scheduled for cleaning on the highlighted days");
    texts.insert("adjust_schedule", "I want to adjust my regular schedule");

    // Maintenance
    texts.insert("maint_title", "Maintenance");
    texts.insert("report_issues", "Report issues in your room");
    texts.insert("open_requests", "Open Requests");
    texts.insert("report_issue", "Report an Issue");
    texts.insert("issue_category", "Issue Category");
    texts.insert("select_category", "Select a category");
    texts.insert("cat_ac", "Air Conditioning / Heating");
    texts.insert("cat_electrical", "Electrical");
    texts.insert("cat_plumbing", "Plumbing");
    texts.insert("cat_tv", "TV / Entertainment");
    texts.insert("cat_internet", "Internet / WiFi");
    texts.insert("cat_furniture", "Furniture");
    texts.insert("cat_other", "Other");
    texts.insert("issue_description", "Description");
    texts.insert("description_prompt", "Describe the issue in detail");
    texts.insert("priority", "Priority");
    texts.insert("priority_low", "Low");
    texts.insert("priority_medium", "Medium");
    texts.insert("priority_high", "High");
    texts.insert("add_photos", "Add Photos");
    texts.insert("take_photo", "Take Photo");
    texts.insert("upload_photo", "Upload Photo");
    texts.insert("auth_entry", "Staff may enter if I am not present");
    texts.insert("contact_method", "Preferred Contact Method");
    texts.insert("contact_app", "App notification");
    texts.insert("contact_phone", "Phone call");
    texts.insert("contact_sms", "Text message");
    texts.insert("contact_email", "Email");

    // Lost & found
    texts.insert("lf_title", "Lost & Found");
    texts.insert("tab_report", "Report Lost Item");
    texts.insert("tab_found", "Found Items");
    texts.insert("tab_my_reports", "My Reports");
    texts.insert("item_name", "Item Name");
    texts.insert("item_description", "Description");
    texts.insert("item_category", "Category");
    texts.insert("last_location", "Last Known Location");
    texts.insert("last_seen", "When did you last see it?");
    texts.insert("contact_number", "Contact Number");
    texts.insert("submit_report", "Submit Report");
    texts.insert("claim_item", "Claim This Item");
    texts.insert("view_details", "View Details");
    texts.insert("found_on", "Found on");
    texts.insert("status_pending", "Pending");
    texts.insert("status_found", "Found");
    texts.insert("status_closed", "Closed");

    // Feedback
    texts.insert("fb_title", "Feedback & Reviews");
    texts.insert("fb_subtitle", "Share your experience with us");
    texts.insert("rate_overall", "Overall");
    texts.insert("rate_room", "Room");
    texts.insert("rate_service", "Service");
    texts.insert("rate_cleanliness", "Cleanliness");
    texts.insert("rate_food", "Food");
    texts.insert("rate_value", "Value");
    texts.insert("review_title", "Review Title");
    texts.insert("your_review", "Your Review");
    texts.insert("anonymous", "Post anonymously");
    texts.insert("what_liked", "What did you like?");
    texts.insert("what_improve", "What could we improve?");
    texts.insert("submit_review", "Submit Review");

    // Chatbot
    texts.insert("chat_title", "Ask a Question");
    texts.insert("chat_assistant", "Our assistant is here to help 24/7");
    texts.insert("chat_greeting", "Hello! I'm your hotel assistant. How can I help you today?");
    texts.insert("chat_placeholder", "Type your question...");
    texts.insert("q_breakfast", "What time is breakfast?");
    texts.insert("q_airport", "How do I get to the airport?");
    texts.insert("q_fitness", "Where is the fitness center?");
    texts.insert("q_wifi", "What is the WiFi password?");

    // Check-out
    texts.insert("co_title", "Check Out");
    texts.insert("step_review", "Review");
    texts.insert("step_payment", "Payment");
    texts.insert("step_confirm", "Confirm");
    texts.insert("stay_summary", "Stay Summary");
    texts.insert("guest", "Guest");
    texts.insert("room", "Room");
    texts.insert("check_in_date", "Check-In");
    texts.insert("check_out_date", "Check-Out");
    texts.insert("late_checkout", "Late Check-Out");
    texts.insert("co_standard", "Standard (11:00 AM)");
    texts.insert("co_1pm", "1:00 PM (+$20)");
    texts.insert("co_3pm", "3:00 PM (+$40)");
    texts.insert("co_6pm", "6:00 PM (+$60)");
    texts.insert("bill_title", "Bill Summary");
    texts.insert("bill_description", "Description");
    texts.insert("bill_date", "Date");
    texts.insert("bill_amount", "Amount");
    texts.insert("bill_subtotal", "Subtotal");
    texts.insert("bill_tax", "Tax");
    texts.insert("bill_total", "Total");
    texts.insert("deposit_paid", "Deposit Paid");
    texts.insert("balance_due", "Balance Due");
    texts.insert("view_detailed", "View Detailed Bill");
    texts.insert("email_receipt", "Email Receipt");
    texts.insert("payment_title", "Payment Method");
    texts.insert("card_on_file", "Card on File");
    texts.insert("new_card", "New Card");
    texts.insert("pay_at_desk", "Pay at Front Desk");
    texts.insert("card_number", "Card Number");
    texts.insert("expiry", "Expiry Date");
    texts.insert("cvc", "CVC");
    texts.insert("cardholder", "Cardholder Name");
    texts.insert("how_was_stay", "How was your stay?");
    texts.insert("rate_poor", "Poor");
    texts.insert("rate_average", "Average");
    texts.insert("rate_good", "Good");
    texts.insert("rate_excellent", "Excellent");
    texts.insert("detailed_feedback", "Leave detailed feedback");
    texts.insert("not_now", "Not Now");
    texts.insert("complete_checkout", "Complete Check-Out");

    texts
}

fn spanish() -> HashMap<&'static str, &'static str> {
    let mut texts = HashMap::new();

    // Common
    texts.insert("back_home", "Volver al inicio");
    texts.insert("submit", "Enviar");
    texts.insert("loading", "Cargando...");
    texts.insert("error", "Algo salió mal. Por favor, inténtelo de nuevo.");
    texts.insert("cancel", "Cancelar");

    // Status notifications
    texts.insert("requested", "Solicitado a las");
    texts.insert("in_progress", "En curso");
    texts.insert("eta", "Tiempo estimado");
    texts.insert("minutes", "minutos");
    texts.insert("update", "Actualizar");
    texts.insert("cleaning_progress", "Limpieza de habitación en curso");
    texts.insert("dnd_enabled", "No molestar activado");
    texts.insert("disable", "Desactivar");

    // Food & dining
    texts.insert("food_title", "Comida y Restaurante");
    texts.insert("food_subtitle", "¿Cómo desea disfrutar su comida?");
    texts.insert("current_orders", "Pedidos actuales");
    texts.insert("room_service", "Servicio a la habitación");
    texts.insert("room_service_desc", "Pida comida y bebida a su habitación");
    texts.insert("select_room_service", "Pedir servicio");
    texts.insert("restaurant", "Restaurante");
    texts.insert("restaurant_desc", "Consulte el menú del restaurante");
    texts.insert("select_restaurant", "Ver menú");
    texts.insert("reservations", "Reservas de mesa");
    texts.insert("reservations_desc", "Reserve una mesa en el restaurante");
    texts.insert("make_reservation", "Hacer reserva");

    // Room service
    texts.insert("rs_title", "Servicio a la habitación");
    texts.insert("your_order", "Su pedido");
    texts.insert("empty_order", "Su pedido está vacío");
    texts.insert("total", "Total");
    texts.insert("place_order", "Realizar pedido");
    texts.insert("order_placed", "¡Su pedido ha sido realizado!");

    // Amenities
    texts.insert("amenities_title", "Instalaciones del hotel");
    texts.insert("amenities_subtitle", "Descubra nuestras instalaciones y servicios");
    texts.insert("hours", "Horario");
    texts.insert("location", "Ubicación");

    // Hotel map
    texts.insert("map_title", "Mapa del hotel");
    texts.insert("map_search", "Buscar un lugar...");
    texts.insert("floor", "Planta");
    texts.insert("loc_pool", "Piscina");
    texts.insert("loc_restaurant", "Restaurante");
    texts.insert("loc_restrooms", "Aseos");
    texts.insert("loc_your_room", "Su habitación");
    texts.insert("loc_exit", "Salida");
    texts.insert("loc_elevator", "Ascensor");

    // Local attractions
    texts.insert("attractions_title", "Atracciones locales");
    texts.insert("attractions_discover", "Descubra lugares y transporte");
    texts.insert("filter_distance", "Distancia");
    texts.insert("filter_category", "Categoría");
    texts.insert("filter_all", "Todas");
    texts.insert("filter_nearby", "Cercanas");
    texts.insert("get_directions", "Cómo llegar");
    texts.insert("transport_title", "Cómo moverse");
    texts.insert("reviews", "reseñas");

    // Clean room
    texts.insert("clean_title", "Limpieza de habitación");
    texts.insert("current_request", "Solicitud actual");
    texts.insert("request_housekeeping", "Solicitar limpieza");
    texts.insert("available_hours", "El servicio de limpieza está disponible de 8:00 a 20:00");
    texts.insert("service_type", "Tipo de servicio");
    texts.insert("select_service_type", "Seleccione un tipo de servicio");
    texts.insert("service_full", "Limpieza completa");
    texts.insert("service_light", "Repaso ligero");
    texts.insert("service_turndown", "Servicio de cobertura");
    texts.insert("service_towels", "Toallas limpias");
    texts.insert("service_supplies", "Reponer artículos");
    texts.insert("preferred_time", "Hora preferida");
    texts.insert("select_time", "Seleccione una hora");
    texts.insert("time_asap", "Lo antes posible");
    texts.insert("time_morning", "Mañana (8:00 - 12:00)");
    texts.insert("time_afternoon", "Tarde (12:00 - 16:00)");
    texts.insert("time_evening", "Noche (16:00 - 20:00)");
    texts.insert("special_instructions", "Instrucciones especiales");
    texts.insert("special_instructions_prompt", "¿Algo que debamos saber?");
    texts.insert("not_present", "No estaré presente durante la limpieza");
    texts.insert("submit_request", "Enviar solicitud");
    texts.insert("regular_schedule", "Horario habitual");
    texts.insert("scheduled_days", "Su habitación tiene limpieza programada los días resaltados");
    texts.insert("adjust_schedule", "Quiero ajustar mi horario habitual");

    // Maintenance
    texts.insert("maint_title", "Mantenimiento");
    texts.insert("report_issues", "Informe de problemas en su habitación");
    texts.insert("open_requests", "Solicitudes abiertas");
    texts.insert("report_issue", "Informar de un problema");
    texts.insert("issue_category", "Categoría del problema");
    texts.insert("select_category", "Seleccione una categoría");
    texts.insert("cat_ac", "Aire acondicionado / Calefacción");
    texts.insert("cat_electrical", "Electricidad");
    texts.insert("cat_plumbing", "Fontanería");
    texts.insert("cat_tv", "TV / Entretenimiento");
    texts.insert("cat_internet", "Internet / WiFi");
    texts.insert("cat_furniture", "Mobiliario");
    texts.insert("cat_other", "Otro");
    texts.insert("issue_description", "Descripción");
    texts.insert("description_prompt", "Describa el problema en detalle");
    texts.insert("priority", "Prioridad");
    texts.insert("priority_low", "Baja");
    texts.insert("priority_medium", "Media");
    texts.insert("priority_high", "Alta");
    texts.insert("add_photos", "Añadir fotos");
    texts.insert("take_photo", "Tomar foto");
    texts.insert("upload_photo", "Subir foto");
    texts.insert("auth_entry", "El personal puede entrar si no estoy presente");
    texts.insert("contact_method", "Método de contacto preferido");
    texts.insert("contact_app", "Notificación en la app");
    texts.insert("contact_phone", "Llamada telefónica");
    texts.insert("contact_sms", "Mensaje de texto");
    texts.insert("contact_email", "Correo electrónico");

    // Lost & found
    texts.insert("lf_title", "Objetos perdidos");
    texts.insert("tab_report", "Informar de pérdida");
    texts.insert("tab_found", "Objetos encontrados");
    texts.insert("tab_my_reports", "Mis informes");
    texts.insert("item_name", "Nombre del objeto");
    texts.insert("item_description", "Descripción");
    texts.insert("item_category", "Categoría");
    texts.insert("last_location", "Última ubicación conocida");
    texts.insert("last_seen", "¿Cuándo lo vio por última vez?");
    texts.insert("contact_number", "Número de contacto");
    texts.insert("submit_report", "Enviar informe");
    texts.insert("claim_item", "Reclamar este objeto");
    texts.insert("view_details", "Ver detalles");
    texts.insert("found_on", "Encontrado el");
    texts.insert("status_pending", "Pendiente");
    texts.insert("status_found", "Encontrado");
    texts.insert("status_closed", "Cerrado");

    // Feedback
    texts.insert("fb_title", "Opiniones y reseñas");
    texts.insert("fb_subtitle", "Comparta su experiencia con nosotros");
    texts.insert("rate_overall", "General");
    texts.insert("rate_room", "Habitación");
    texts.insert("rate_service", "Servicio");
    texts.insert("rate_cleanliness", "Limpieza");
    texts.insert("rate_food", "Comida");
    texts.insert("rate_value", "Relación calidad-precio");
    texts.insert("review_title", "Título de la reseña");
    texts.insert("your_review", "Su reseña");
    texts.insert("anonymous", "Publicar de forma anónima");
    texts.insert("what_liked", "¿Qué le gustó?");
    texts.insert("what_improve", "¿Qué podemos mejorar?");
    texts.insert("submit_review", "Enviar reseña");

    // Chatbot
    texts.insert("chat_title", "Hacer una pregunta");
    texts.insert("chat_assistant", "Nuestro asistente está disponible 24/7");
    texts.insert("chat_greeting", "¡Hola! Soy su asistente del hotel. ¿En qué puedo ayudarle?");
    texts.insert("chat_placeholder", "Escriba su pregunta...");
    texts.insert("q_breakfast", "¿A qué hora es el desayuno?");
    texts.insert("q_airport", "¿Cómo llego al aeropuerto?");
    texts.insert("q_fitness", "¿Dónde está el gimnasio?");
    texts.insert("q_wifi", "¿Cuál es la contraseña del WiFi?");

    // Check-out
    texts.insert("co_title", "Check-Out");
    texts.insert("step_review", "Revisar");
    texts.insert("step_payment", "Pago");
    texts.insert("step_confirm", "Confirmar");
    texts.insert("stay_summary", "Resumen de la estancia");
    texts.insert("guest", "Huésped");
    texts.insert("room", "Habitación");
    texts.insert("check_in_date", "Entrada");
    texts.insert("check_out_date", "Salida");
    texts.insert("late_checkout", "Salida tardía");
    texts.insert("co_standard", "Estándar (11:00)");
    texts.insert("co_1pm", "13:00 (+20 $)");
    texts.insert("co_3pm", "15:00 (+40 $)");
    texts.insert("co_6pm", "18:00 (+60 $)");
    texts.insert("bill_title", "Resumen de la factura");
    texts.insert("bill_description", "Concepto");
    texts.insert("bill_date", "Fecha");
    texts.insert("bill_amount", "Importe");
    texts.insert("bill_subtotal", "Subtotal");
    texts.insert("bill_tax", "Impuestos");
    texts.insert("bill_total", "Total");
    texts.insert("deposit_paid", "Depósito pagado");
    texts.insert("balance_due", "Saldo pendiente");
    texts.insert("view_detailed", "Ver factura detallada");
    texts.insert("email_receipt", "Enviar recibo por correo");
    texts.insert("payment_title", "Método de pago");
    texts.insert("card_on_file", "Tarjeta registrada");
    texts.insert("new_card", "Nueva tarjeta");
    texts.insert("pay_at_desk", "Pagar en recepción");
    texts.insert("card_number", "Número de tarjeta");
    texts.insert("expiry", "Fecha de caducidad");
    texts.insert("cvc", "CVC");
    texts.insert("cardholder", "Titular de la tarjeta");
    texts.insert("how_was_stay", "¿Qué tal su estancia?");
    texts.insert("rate_poor", "Mala");
    texts.insert("rate_average", "Normal");
    texts.insert("rate_good", "Buena");
    texts.insert("rate_excellent", "Excelente");
    texts.insert("detailed_feedback", "Dejar una opinión detallada");
    texts.insert("not_now", "Ahora no");
    texts.insert("complete_checkout", "Completar check-out");

    texts
}

fn french() -> HashMap<&'static str, &'static str> {
    let mut texts = HashMap::new();

    // Common
    texts.insert("back_home", "Retour à l'accueil");
    texts.insert("submit", "Envoyer");
    texts.insert("loading", "Chargement...");
    texts.insert("error", "Une erreur est survenue. Veuillez réessayer.");
    texts.insert("cancel", "Annuler");

    // Status notifications
    texts.insert("requested", "Demandé à");
    texts.insert("in_progress", "En cours");
    texts.insert("eta", "Temps estimé");
    texts.insert("minutes", "minutes");
    texts.insert("update", "Mettre à jour");
    texts.insert("cleaning_progress", "Nettoyage de la chambre en cours");
    texts.insert("dnd_enabled", "Ne pas déranger activé");
    texts.insert("disable", "Désactiver");

    // Food & dining
    texts.insert("food_title", "Restauration");
    texts.insert("food_subtitle", "Comment souhaitez-vous prendre votre repas ?");
    texts.insert("current_orders", "Commandes en cours");
    texts.insert("room_service", "Service en chambre");
    texts.insert("room_service_desc", "Commandez repas et boissons dans votre chambre");
    texts.insert("select_room_service", "Commander");
    texts.insert("restaurant", "Restaurant");
    texts.insert("restaurant_desc", "Consultez le menu du restaurant");
    texts.insert("select_restaurant", "Voir le menu");
    texts.insert("reservations", "Réservations");
    texts.insert("reservations_desc", "Réservez une table au restaurant");
    texts.insert("make_reservation", "Réserver");

    // Room service
    texts.insert("rs_title", "Service en chambre");
    texts.insert("your_order", "Votre commande");
    texts.insert("empty_order", "Votre commande est vide");
    texts.insert("total", "Total");
    texts.insert("place_order", "Commander");
    texts.insert("order_placed", "Votre commande a été envoyée !");

    // Amenities
    texts.insert("amenities_title", "Équipements de l'hôtel");
    texts.insert("amenities_subtitle", "Découvrez nos installations et services");
    texts.insert("hours", "Horaires");
    texts.insert("location", "Emplacement");

    // Hotel map
    texts.insert("map_title", "Plan de l'hôtel");
    texts.insert("map_search", "Rechercher un lieu...");
    texts.insert("floor", "Étage");
    texts.insert("loc_pool", "Piscine");
    texts.insert("loc_restaurant", "Restaurant");
    texts.insert("loc_restrooms", "Toilettes");
    texts.insert("loc_your_room", "Votre chambre");
    texts.insert("loc_exit", "Sortie");
    texts.insert("loc_elevator", "Ascenseur");

    // Local attractions
    texts.insert("attractions_title", "Attractions locales");
    texts.insert("attractions_discover", "Découvrez les lieux et transports");
    texts.insert("filter_distance", "Distance");
    texts.insert("filter_category", "Catégorie");
    texts.insert("filter_all", "Toutes");
    texts.insert("filter_nearby", "À proximité");
    texts.insert("get_directions", "Itinéraire");
    texts.insert("transport_title", "Se déplacer");
    texts.insert("reviews", "avis");

    // Clean room
    texts.insert("clean_title", "Nettoyage de la chambre");
    texts.insert("current_request", "Demande en cours");
    texts.insert("request_housekeeping", "Demander le ménage");
    texts.insert("available_hours", "Le service de ménage est disponible de 8h à 20h");
    texts.insert("service_type", "Type de service");
    texts.insert("select_service_type", "Sélectionnez un type de service");
    texts.insert("service_full", "Nettoyage complet");
    texts.insert("service_light", "Rafraîchissement");
    texts.insert("service_turndown", "Service de couverture");
    texts.insert("service_towels", "Serviettes propres");
    texts.insert("service_supplies", "Réapprovisionnement");
    texts.insert("preferred_time", "Heure préférée");
    texts.insert("select_time", "Sélectionnez une heure");
    texts.insert("time_asap", "Dès que possible");
    texts.insert("time_morning", "Matin (8h - 12h)");
    texts.insert("time_afternoon", "Après-midi (12h - 16h)");
    texts.insert("time_evening", "Soir (16h - 20h)");
    texts.insert("special_instructions", "Instructions particulières");
    texts.insert("special_instructions_prompt", "Quelque chose à nous signaler ?");
    texts.insert("not_present", "Je ne serai pas présent pendant le nettoyage");
    texts.insert("submit_request", "Envoyer la demande");
    texts.insert("regular_schedule", "Horaire habituel");
    texts.insert("scheduled_days", "Votre chambre est nettoyée les jours surlignés");
    texts.insert("adjust_schedule", "Je souhaite ajuster mon horaire habituel");

    // Maintenance
    texts.insert("maint_title", "Maintenance");
    texts.insert("report_issues", "Signalez un problème dans votre chambre");
    texts.insert("open_requests", "Demandes ouvertes");
    texts.insert("report_issue", "Signaler un problème");
    texts.insert("issue_category", "Catégorie du problème");
    texts.insert("select_category", "Sélectionnez une catégorie");
    texts.insert("cat_ac", "Climatisation / Chauffage");
    texts.insert("cat_electrical", "Électricité");
    texts.insert("cat_plumbing", "Plomberie");
    texts.insert("cat_tv", "TV / Divertissement");
    texts.insert("cat_internet", "Internet / WiFi");
    texts.insert("cat_furniture", "Mobilier");
    texts.insert("cat_other", "Autre");
    texts.insert("issue_description", "Description");
    texts.insert("description_prompt", "Décrivez le problème en détail");
    texts.insert("priority", "Priorité");
    texts.insert("priority_low", "Basse");
    texts.insert("priority_medium", "Moyenne");
    texts.insert("priority_high", "Haute");
    texts.insert("add_photos", "Ajouter des photos");
    texts.insert("take_photo", "Prendre une photo");
    texts.insert("upload_photo", "Télécharger une photo");
    texts.insert("auth_entry", "Le personnel peut entrer en mon absence");
    texts.insert("contact_method", "Moyen de contact préféré");
    texts.insert("contact_app", "Notification dans l'app");
    texts.insert("contact_phone", "Appel téléphonique");
    texts.insert("contact_sms", "SMS");
    texts.insert("contact_email", "E-mail");

    // Lost & found
    texts.insert("lf_title", "Objets trouvés");
    texts.insert("tab_report", "Déclarer une perte");
    texts.insert("tab_found", "Objets trouvés");
    texts.insert("tab_my_reports", "Mes déclarations");
    texts.insert("item_name", "Nom de l'objet");
    texts.insert("item_description", "Description");
    texts.insert("item_category", "Catégorie");
    texts.insert("last_location", "Dernier emplacement connu");
    texts.insert("last_seen", "Quand l'avez-vous vu pour la dernière fois ?");
    texts.insert("contact_number", "Numéro de contact");
    texts.insert("submit_report", "Envoyer la déclaration");
    texts.insert("claim_item", "Réclamer cet objet");
    texts.insert("view_details", "Voir les détails");
    texts.insert("found_on", "Trouvé le");
    texts.insert("status_pending", "En attente");
    texts.insert("status_found", "Trouvé");
    texts.insert("status_closed", "Clôturé");

    // Feedback
    texts.insert("fb_title", "Avis et commentaires");
    texts.insert("fb_subtitle", "Partagez votre expérience avec nous");
    texts.insert("rate_overall", "Général");
    texts.insert("rate_room", "Chambre");
    texts.insert("rate_service", "Service");
    texts.insert("rate_cleanliness", "Propreté");
    texts.insert("rate_food", "Restauration");
    texts.insert("rate_value", "Rapport qualité-prix");
    texts.insert("review_title", "Titre de l'avis");
    texts.insert("your_review", "Votre avis");
    texts.insert("anonymous", "Publier anonymement");
    texts.insert("what_liked", "Qu'avez-vous apprécié ?");
    texts.insert("what_improve", "Que pouvons-nous améliorer ?");
    texts.insert("submit_review", "Envoyer l'avis");

    // Chatbot
    texts.insert("chat_title", "Poser une question");
    texts.insert("chat_assistant", "Notre assistant est disponible 24h/24");
    texts.insert("chat_greeting", "Bonjour ! Je suis votre assistant. Comment puis-je vous aider ?");
    texts.insert("chat_placeholder", "Écrivez votre question...");
    texts.insert("q_breakfast", "À quelle heure est le petit-déjeuner ?");
    texts.insert("q_airport", "Comment aller à l'aéroport ?");
    texts.insert("q_fitness", "Où est la salle de sport ?");
    texts.insert("q_wifi", "Quel est le mot de passe WiFi ?");

    // Check-out
    texts.insert("co_title", "Départ");
    texts.insert("step_review", "Vérifier");
    texts.insert("step_payment", "Paiement");
    texts.insert("step_confirm", "Confirmer");
    texts.insert("stay_summary", "Résumé du séjour");
    texts.insert("guest", "Client");
    texts.insert("room", "Chambre");
    texts.insert("check_in_date", "Arrivée");
    texts.insert("check_out_date", "Départ");
    texts.insert("late_checkout", "Départ tardif");
    texts.insert("co_standard", "Standard (11h00)");
    texts.insert("co_1pm", "13h00 (+20 $)");
    texts.insert("co_3pm", "15h00 (+40 $)");
    texts.insert("co_6pm", "18h00 (+60 $)");
    texts.insert("bill_title", "Récapitulatif de la facture");
    texts.insert("bill_description", "Désignation");
    texts.insert("bill_date", "Date");
    texts.insert("bill_amount", "Montant");
    texts.insert("bill_subtotal", "Sous-total");
    texts.insert("bill_tax", "Taxes");
    texts.insert("bill_total", "Total");
    texts.insert("deposit_paid", "Acompte versé");
    texts.insert("balance_due", "Solde à payer");
    texts.insert("view_detailed", "Voir la facture détaillée");
    texts.insert("email_receipt", "Recevoir le reçu par e-mail");
    texts.insert("payment_title", "Moyen de paiement");
    texts.insert("card_on_file", "Carte enregistrée");
    texts.insert("new_card", "Nouvelle carte");
    texts.insert("pay_at_desk", "Payer à la réception");
    texts.insert("card_number", "Numéro de carte");
    texts.insert("expiry", "Date d'expiration");
    texts.insert("cvc", "CVC");
    texts.insert("cardholder", "Titulaire de la carte");
    texts.insert("how_was_stay", "Comment s'est passé votre séjour ?");
    texts.insert("rate_poor", "Mauvais");
    texts.insert("rate_average", "Moyen");
    texts.insert("rate_good", "Bien");
    texts.insert("rate_excellent", "Excellent");
    texts.insert("detailed_feedback", "Laisser un avis détaillé");
    texts.insert("not_now", "Pas maintenant");
    texts.insert("complete_checkout", "Finaliser le départ");

    texts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_code_falls_back_to_english() {
        assert_eq!(Language::from_code("pt"), Language::English);
        assert_eq!(t("pt", "total"), "Total");
    }

    #[test]
    fn missing_key_falls_back_to_english_then_key() {
        // German has no table yet, English text is used
        assert_eq!(t("de", "your_order"), "Your Order");
        // Completely unknown key echoes the key
        assert_eq!(t("en", "no_such_key"), "no_such_key");
    }

    #[test]
    fn translated_key_uses_language_table() {
        assert_eq!(t("es", "your_order"), "Su pedido");
        assert_eq!(t("fr", "your_order"), "Votre commande");
    }
}
