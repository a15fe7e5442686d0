// Shared application state, provided once at the root

pub mod prefs;
pub mod session;

pub use prefs::{ActiveRequest, PrefsAction, PrefsState};
pub use session::{SessionAction, SessionState};
