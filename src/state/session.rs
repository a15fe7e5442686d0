use std::rc::Rc;
use yew::Reducible;

use crate::models::User;

/// Single source of truth for who is logged in and how far through
/// onboarding they are. Constructed once at the application root and shared
/// through context for the whole process lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_logged_in: bool,
    pub is_checked_in: bool,
    pub loading: bool,
    pub error: Option<String>,
}

pub enum SessionAction {
    LoginStart,
    LoginSuccess { user: User, checked_in: bool },
    LoginFailure(String),
    CompleteCheckIn,
    Logout,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        match action {
            SessionAction::LoginStart => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            SessionAction::LoginSuccess { user, checked_in } => Rc::new(Self {
                user: Some(user),
                is_logged_in: true,
                is_checked_in: checked_in,
                loading: false,
                error: None,
            }),
            SessionAction::LoginFailure(message) => Rc::new(Self {
                loading: false,
                error: Some(message),
                ..(*self).clone()
            }),
            SessionAction::CompleteCheckIn => Rc::new(Self {
                is_checked_in: true,
                ..(*self).clone()
            }),
            // Idempotent: logging out twice lands on the same default state
            SessionAction::Logout => Rc::new(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest() -> User {
        User {
            id: "g-1".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            room_number: Some("301".to_string()),
            check_in_date: None,
            check_out_date: None,
        }
    }

    fn apply(state: SessionState, action: SessionAction) -> SessionState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn failed_login_stays_logged_out_with_an_error() {
        let state = apply(SessionState::default(), SessionAction::LoginStart);
        assert!(state.loading);

        let state = apply(
            state,
            SessionAction::LoginFailure("Invalid reservation code".to_string()),
        );
        assert!(!state.is_logged_in);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Invalid reservation code"));
    }

    #[test]
    fn login_after_logout_matches_a_fresh_login() {
        let login = SessionAction::LoginSuccess {
            user: guest(),
            checked_in: true,
        };
        let fresh = apply(SessionState::default(), login);

        let relogin = apply(
            apply(fresh.clone(), SessionAction::Logout),
            SessionAction::LoginSuccess {
                user: guest(),
                checked_in: true,
            },
        );
        assert_eq!(fresh, relogin);
    }

    #[test]
    fn logout_is_idempotent() {
        let once = apply(
            apply(
                SessionState::default(),
                SessionAction::LoginSuccess {
                    user: guest(),
                    checked_in: false,
                },
            ),
            SessionAction::Logout,
        );
        let twice = apply(once.clone(), SessionAction::Logout);
        assert_eq!(once, SessionState::default());
        assert_eq!(once, twice);
    }

    #[test]
    fn complete_check_in_only_flips_the_flag() {
        let logged_in = apply(
            SessionState::default(),
            SessionAction::LoginSuccess {
                user: guest(),
                checked_in: false,
            },
        );
        let checked_in = apply(logged_in.clone(), SessionAction::CompleteCheckIn);
        assert!(checked_in.is_checked_in);
        assert_eq!(checked_in.user, logged_in.user);
        assert!(checked_in.is_logged_in);
    }

    #[test]
    fn new_login_attempt_clears_a_previous_error() {
        let failed = apply(
            SessionState::default(),
            SessionAction::LoginFailure("nope".to_string()),
        );
        let retry = apply(failed, SessionAction::LoginStart);
        assert!(retry.error.is_none());
        assert!(retry.loading);
    }
}
