use std::rc::Rc;
use yew::Reducible;

use crate::models::{CleaningRequest, MaintenanceRequest, RequestKind};
use crate::utils::constants::{
    STORAGE_KEY_ACTIVE_CLEANING, STORAGE_KEY_ACTIVE_MAINTENANCE, STORAGE_KEY_LANGUAGE,
};
use crate::utils::storage;

/// Cross-page UI state several independent pages read or write without a
/// round trip: selected language, do-not-disturb, and at most one active
/// request per kind (single-slot, a second submission overwrites the first
/// in client memory even though the backend may track many).
#[derive(Debug, Clone, PartialEq)]
pub struct PrefsState {
    pub current_language: String,
    pub dnd_active: bool,
    pub active_cleaning: Option<CleaningRequest>,
    pub active_maintenance: Option<MaintenanceRequest>,
}

impl Default for PrefsState {
    fn default() -> Self {
        Self {
            current_language: "en".to_string(),
            dnd_active: false,
            active_cleaning: None,
            active_maintenance: None,
        }
    }
}

impl PrefsState {
    /// Initial state at startup: language and any pending requests are
    /// restored from storage so a reload keeps the home screen banners.
    pub fn restore() -> Self {
        let mut state = Self::default();
        if let Some(language) = storage::load_string(STORAGE_KEY_LANGUAGE) {
            state.current_language = language;
        }
        state.active_cleaning = storage::load_from_storage(STORAGE_KEY_ACTIVE_CLEANING);
        state.active_maintenance = storage::load_from_storage(STORAGE_KEY_ACTIVE_MAINTENANCE);
        state
    }
}

pub enum ActiveRequest {
    Cleaning(CleaningRequest),
    Maintenance(MaintenanceRequest),
}

pub enum PrefsAction {
    /// No validation against a supported-language set; unknown codes fall
    /// back at display time.
    SetLanguage(String),
    /// Pure local flip. The caller must have confirmed the backend call
    /// first, otherwise local and server state diverge silently.
    ToggleDnd,
    AddActiveRequest(ActiveRequest),
    RemoveActiveRequest(RequestKind),
}

impl Reducible for PrefsState {
    type Action = PrefsAction;

    fn reduce(self: Rc<Self>, action: PrefsAction) -> Rc<Self> {
        match action {
            PrefsAction::SetLanguage(code) => Rc::new(Self {
                current_language: code,
                ..(*self).clone()
            }),
            PrefsAction::ToggleDnd => Rc::new(Self {
                dnd_active: !self.dnd_active,
                ..(*self).clone()
            }),
            PrefsAction::AddActiveRequest(ActiveRequest::Cleaning(request)) => Rc::new(Self {
                active_cleaning: Some(request),
                ..(*self).clone()
            }),
            PrefsAction::AddActiveRequest(ActiveRequest::Maintenance(request)) => Rc::new(Self {
                active_maintenance: Some(request),
                ..(*self).clone()
            }),
            PrefsAction::RemoveActiveRequest(RequestKind::Cleaning) => Rc::new(Self {
                active_cleaning: None,
                ..(*self).clone()
            }),
            PrefsAction::RemoveActiveRequest(RequestKind::Maintenance) => Rc::new(Self {
                active_maintenance: None,
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn apply(state: PrefsState, action: PrefsAction) -> PrefsState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn cleaning(id: &str) -> CleaningRequest {
        CleaningRequest {
            id: id.to_string(),
            status: "confirmed".to_string(),
            requested: "10:30".to_string(),
            cleaning_type: "full".to_string(),
            eta: None,
        }
    }

    fn maintenance(id: &str) -> MaintenanceRequest {
        MaintenanceRequest {
            id: id.to_string(),
            status: "open".to_string(),
            requested: "11:00".to_string(),
            issue: "AC not cooling".to_string(),
            priority: Priority::High,
            eta: None,
        }
    }

    #[test]
    fn second_cleaning_request_overwrites_the_first() {
        let state = apply(
            PrefsState::default(),
            PrefsAction::AddActiveRequest(ActiveRequest::Cleaning(cleaning("a"))),
        );
        let state = apply(
            state,
            PrefsAction::AddActiveRequest(ActiveRequest::Cleaning(cleaning("b"))),
        );
        assert_eq!(state.active_cleaning.as_ref().map(|r| r.id.as_str()), Some("b"));
    }

    #[test]
    fn request_slots_are_independent_per_kind() {
        let state = apply(
            apply(
                PrefsState::default(),
                PrefsAction::AddActiveRequest(ActiveRequest::Cleaning(cleaning("a"))),
            ),
            PrefsAction::AddActiveRequest(ActiveRequest::Maintenance(maintenance("m"))),
        );
        assert!(state.active_cleaning.is_some());
        assert!(state.active_maintenance.is_some());

        let state = apply(state, PrefsAction::RemoveActiveRequest(RequestKind::Cleaning));
        assert!(state.active_cleaning.is_none());
        assert!(state.active_maintenance.is_some());
    }

    #[test]
    fn dnd_toggle_flips_only_the_flag() {
        let state = apply(PrefsState::default(), PrefsAction::ToggleDnd);
        assert!(state.dnd_active);
        let state = apply(state, PrefsAction::ToggleDnd);
        assert!(!state.dnd_active);
    }

    #[test]
    fn unsupported_language_code_is_accepted_verbatim() {
        let state = apply(
            PrefsState::default(),
            PrefsAction::SetLanguage("xx".to_string()),
        );
        assert_eq!(state.current_language, "xx");
    }
}
