use yew::prelude::*;

use crate::models::RequestKind;
use crate::state::{ActiveRequest, PrefsAction, PrefsState};
use crate::utils::constants::{
    STORAGE_KEY_ACTIVE_CLEANING, STORAGE_KEY_ACTIVE_MAINTENANCE, STORAGE_KEY_LANGUAGE,
};
use crate::utils::storage;

pub type PrefsHandle = UseReducerHandle<PrefsState>;

#[hook]
pub fn use_prefs() -> PrefsHandle {
    use_context::<PrefsHandle>().expect("use_prefs must be used inside the App providers")
}

/// Switch language and remember the choice across reloads.
pub fn select_language(prefs: &PrefsHandle, code: String) {
    let _ = storage::save_string(STORAGE_KEY_LANGUAGE, &code);
    prefs.dispatch(PrefsAction::SetLanguage(code));
}

/// Record a freshly confirmed request and persist it so the home screen
/// banner survives a reload.
pub fn add_active_request(prefs: &PrefsHandle, request: ActiveRequest) {
    match &request {
        ActiveRequest::Cleaning(r) => {
            let _ = storage::save_to_storage(STORAGE_KEY_ACTIVE_CLEANING, r);
        }
        ActiveRequest::Maintenance(r) => {
            let _ = storage::save_to_storage(STORAGE_KEY_ACTIVE_MAINTENANCE, r);
        }
    }
    prefs.dispatch(PrefsAction::AddActiveRequest(request));
}

pub fn remove_active_request(prefs: &PrefsHandle, kind: RequestKind) {
    let key = match kind {
        RequestKind::Cleaning => STORAGE_KEY_ACTIVE_CLEANING,
        RequestKind::Maintenance => STORAGE_KEY_ACTIVE_MAINTENANCE,
    };
    let _ = storage::remove_from_storage(key);
    prefs.dispatch(PrefsAction::RemoveActiveRequest(kind));
}
