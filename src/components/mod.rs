pub mod footer;
pub mod language_selector;
pub mod logo;
pub mod option_card;
pub mod status_notification;

pub use footer::Footer;
pub use language_selector::FloatingLanguageSelector;
pub use logo::LogoPlaceholder;
pub use option_card::OptionCard;
pub use status_notification::StatusNotification;
