use super::*;
use crate::net::types::{Session, User};

fn signed_out_state() -> SessionState {
    let mut state = SessionState::default();
    state.mark_initialized();
    state
}

fn signed_in_state() -> SessionState {
    let mut state = signed_out_state();
    state.apply(Some(Session {
        access_token: "at-1".to_owned(),
        token_type: "bearer".to_owned(),
        expires_at: 1_754_500_000,
        refresh_token: "rt-1".to_owned(),
        user: User {
            id: "u1".to_owned(),
            email: None,
            created_at: None,
        },
    }));
    state
}

#[test]
fn classify_splits_the_navigation_tree() {
    assert_eq!(RouteArea::classify("/welcome"), RouteArea::Welcome);
    assert_eq!(RouteArea::classify("/sign-in"), RouteArea::Auth);
    assert_eq!(RouteArea::classify("/sign-up"), RouteArea::Auth);
    assert_eq!(RouteArea::classify("/forgot-password"), RouteArea::Auth);
    assert_eq!(RouteArea::classify("/create-password"), RouteArea::Auth);
    assert_eq!(RouteArea::classify("/"), RouteArea::Protected);
    assert_eq!(RouteArea::classify(""), RouteArea::Protected);
    assert_eq!(RouteArea::classify("/settings"), RouteArea::Protected);
}

#[test]
fn uninitialized_defers_for_any_session_and_segment() {
    let state = SessionState::default();
    for path in ["/", "/welcome", "/sign-in", "/settings"] {
        assert_eq!(route_decision(&state, path), RouteDecision::Defer);
    }
    let mut with_session = signed_in_state();
    with_session.initialized = false;
    assert_eq!(route_decision(&with_session, "/"), RouteDecision::Defer);
}

#[test]
fn no_session_on_welcome_is_allowed() {
    assert_eq!(route_decision(&signed_out_state(), "/welcome"), RouteDecision::Allow);
}

#[test]
fn no_session_on_protected_redirects_to_welcome() {
    assert_eq!(route_decision(&signed_out_state(), "/"), RouteDecision::RedirectWelcome);
    assert_eq!(route_decision(&signed_out_state(), "/settings"), RouteDecision::RedirectWelcome);
}

#[test]
fn no_session_on_auth_screens_is_allowed() {
    for path in ["/sign-in", "/sign-up", "/forgot-password", "/create-password"] {
        assert_eq!(route_decision(&signed_out_state(), path), RouteDecision::Allow);
    }
}

#[test]
fn session_on_welcome_redirects_to_protected() {
    assert_eq!(route_decision(&signed_in_state(), "/welcome"), RouteDecision::RedirectProtected);
}

#[test]
fn session_on_protected_is_allowed() {
    assert_eq!(route_decision(&signed_in_state(), "/"), RouteDecision::Allow);
    assert_eq!(route_decision(&signed_in_state(), "/settings"), RouteDecision::Allow);
}

#[test]
fn session_on_create_password_is_allowed() {
    // Recovery sessions land here to set the new password.
    assert_eq!(route_decision(&signed_in_state(), "/create-password"), RouteDecision::Allow);
}
