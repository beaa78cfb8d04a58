use super::*;
use crate::net::types::User;

fn session_fixture(expires_at: i64) -> Session {
    Session {
        access_token: "at-1".to_owned(),
        token_type: "bearer".to_owned(),
        expires_at,
        refresh_token: "rt-1".to_owned(),
        user: User {
            id: "u1".to_owned(),
            email: Some("alice@example.com".to_owned()),
            created_at: None,
        },
    }
}

#[test]
fn signed_out_and_recovery_return_to_welcome() {
    assert!(returns_to_welcome(AuthEventKind::SignedOut));
    assert!(returns_to_welcome(AuthEventKind::PasswordRecovery));
}

#[test]
fn other_events_do_not_navigate() {
    assert!(!returns_to_welcome(AuthEventKind::SignedIn));
    assert!(!returns_to_welcome(AuthEventKind::TokenRefreshed));
    assert!(!returns_to_welcome(AuthEventKind::UserUpdated));
}

#[test]
fn retain_unrefreshed_keeps_a_valid_session() {
    let cached = session_fixture(2_000);
    assert_eq!(retain_unrefreshed(cached.clone(), 1_999), Some(cached));
}

#[test]
fn retain_unrefreshed_drops_an_expired_session() {
    assert_eq!(retain_unrefreshed(session_fixture(2_000), 2_000), None);
    assert_eq!(retain_unrefreshed(session_fixture(2_000), 5_000), None);
}

#[test]
fn needs_refresh_applies_the_renewal_margin() {
    let session = session_fixture(1_000);
    assert!(!needs_refresh(&session, 1_000 - REFRESH_MARGIN_SECS - 1));
    assert!(needs_refresh(&session, 1_000 - REFRESH_MARGIN_SECS));
    assert!(needs_refresh(&session, 1_000));
}

#[test]
fn disconnected_handle_swallows_events() {
    let events = AuthEvents::disconnected();
    events.emit(AuthChange {
        event: AuthEventKind::SignedOut,
        session: None,
    });
    events.close();
}
