use super::*;

fn session_fixture(id: &str) -> Session {
    Session {
        access_token: format!("at-{id}"),
        token_type: "bearer".to_owned(),
        expires_at: 1_754_500_000,
        refresh_token: format!("rt-{id}"),
        user: User {
            id: id.to_owned(),
            email: Some(format!("{id}@example.com")),
            created_at: None,
        },
    }
}

#[test]
fn starts_uninitialized_and_signed_out() {
    let state = SessionState::default();
    assert!(!state.initialized);
    assert!(!state.signed_in());
    assert_eq!(state.user, None);
}

#[test]
fn apply_derives_user_from_session() {
    let mut state = SessionState::default();
    state.apply(Some(session_fixture("u1")));
    assert!(state.signed_in());
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn apply_none_clears_both_fields() {
    let mut state = SessionState::default();
    state.apply(Some(session_fixture("u1")));
    state.apply(None);
    assert_eq!(state.session, None);
    assert_eq!(state.user, None);
}

#[test]
fn user_present_iff_session_present_across_event_sequences() {
    let mut state = SessionState::default();
    let updates = [
        Some(session_fixture("u1")),
        None,
        None,
        Some(session_fixture("u2")),
        Some(session_fixture("u3")),
        None,
    ];
    for update in updates {
        state.apply(update);
        assert_eq!(state.user.is_some(), state.session.is_some());
        assert_eq!(
            state.user.as_ref().map(|u| u.id.clone()),
            state.session.as_ref().map(|s| s.user.id.clone())
        );
    }
}

#[test]
fn mark_initialized_latches() {
    let mut state = SessionState::default();
    assert!(!state.initialized);
    state.mark_initialized();
    assert!(state.initialized);
    state.mark_initialized();
    assert!(state.initialized);
}

#[test]
fn session_updates_never_touch_the_latch() {
    let mut state = SessionState::default();
    state.mark_initialized();
    state.apply(Some(session_fixture("u1")));
    assert!(state.initialized);
    state.apply(None);
    assert!(state.initialized);
}
