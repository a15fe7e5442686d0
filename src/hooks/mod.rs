pub mod use_prefs;
pub mod use_session;

pub use use_prefs::{
    add_active_request, remove_active_request, select_language, use_prefs, PrefsHandle,
};
pub use use_session::{login, logout, use_session, LoginOutcome, SessionHandle};
