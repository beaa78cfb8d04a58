use super::*;

fn user_fixture() -> User {
    User {
        id: "u1".to_owned(),
        email: Some("alice@example.com".to_owned()),
        created_at: None,
    }
}

#[test]
fn parses_a_recovery_fragment() {
    let tokens = parse_recovery_fragment("#access_token=at-1&expires_at=1754500000&refresh_token=rt-1&type=recovery")
        .expect("recovery fragment parses");
    assert_eq!(tokens.access_token, "at-1");
    assert_eq!(tokens.refresh_token, "rt-1");
    assert_eq!(tokens.expires_at, Some(1_754_500_000));
}

#[test]
fn ignores_non_recovery_fragments() {
    assert_eq!(parse_recovery_fragment(""), None);
    assert_eq!(parse_recovery_fragment("#section-2"), None);
    assert_eq!(
        parse_recovery_fragment("#access_token=at-1&refresh_token=rt-1&type=magiclink"),
        None
    );
}

#[test]
fn requires_both_tokens() {
    assert_eq!(parse_recovery_fragment("#type=recovery&access_token=at-1"), None);
    assert_eq!(parse_recovery_fragment("#type=recovery&refresh_token=rt-1"), None);
    assert_eq!(
        parse_recovery_fragment("#type=recovery&access_token=&refresh_token=rt-1"),
        None
    );
}

#[test]
fn tolerates_a_missing_expiry() {
    let tokens =
        parse_recovery_fragment("#access_token=at-1&refresh_token=rt-1&type=recovery").expect("fragment parses");
    assert_eq!(tokens.expires_at, None);
    let session = tokens.into_session(user_fixture(), 1_000);
    assert_eq!(session.expires_at, 1_000 + DEFAULT_RECOVERY_TTL_SECS);
}

#[test]
fn into_session_carries_tokens_and_identity() {
    let tokens = parse_recovery_fragment("#access_token=at-1&expires_at=2000&refresh_token=rt-1&type=recovery")
        .expect("fragment parses");
    let session = tokens.into_session(user_fixture(), 1_000);
    assert_eq!(session.access_token, "at-1");
    assert_eq!(session.refresh_token, "rt-1");
    assert_eq!(session.expires_at, 2_000);
    assert_eq!(session.token_type, "bearer");
    assert_eq!(session.user.id, "u1");
}

#[test]
fn new_password_form_applies_the_shared_policy() {
    assert_eq!(
        validate_create_password_input("Sup3r-secret", "Sup3r-secret"),
        Ok("Sup3r-secret".to_owned())
    );
    assert_eq!(
        validate_create_password_input("Sup3r-secret", "other"),
        Err("Your passwords do not match.")
    );
    assert_eq!(
        validate_create_password_input("short", "short"),
        Err("Must be at least 8 characters in length.")
    );
}
