use yew::prelude::*;

use crate::services::auth_service;
use crate::state::{SessionAction, SessionState};

pub type SessionHandle = UseReducerHandle<SessionState>;

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session must be used inside the App providers")
}

/// What the login flow reports back to the calling page. Failures are folded
/// into this shape; nothing is thrown past this boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: Option<String>,
}

/// Run the login flow against the backend and keep the session state in
/// step: loading flag on, then either the authenticated state or an inline
/// error message.
pub async fn login(session: SessionHandle, reservation_code: String) -> LoginOutcome {
    session.dispatch(SessionAction::LoginStart);

    match auth_service::login_user(&reservation_code).await {
        Ok(response) if response.success => match response.data {
            Some(data) => {
                log::info!("✅ Login successful: {}", data.user.name);
                session.dispatch(SessionAction::LoginSuccess {
                    user: data.user,
                    checked_in: data.checked_in,
                });
                LoginOutcome {
                    success: true,
                    message: None,
                }
            }
            None => fail(&session, "Invalid reservation code".to_string()),
        },
        Ok(response) => {
            let message = response
                .message
                .unwrap_or_else(|| "Invalid reservation code".to_string());
            fail(&session, message)
        }
        Err(e) => fail(&session, e.to_string()),
    }
}

fn fail(session: &SessionHandle, message: String) -> LoginOutcome {
    log::error!("❌ Login failed: {}", message);
    session.dispatch(SessionAction::LoginFailure(message.clone()));
    LoginOutcome {
        success: false,
        message: Some(message),
    }
}

/// Reset the session and clear the persisted token. Safe to call twice.
pub fn logout(session: &SessionHandle) {
    auth_service::logout_user();
    session.dispatch(SessionAction::Logout);
    log::info!("👋 Logged out");
}
