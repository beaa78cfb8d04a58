use super::*;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(signup_endpoint("http://localhost:54321"), "http://localhost:54321/auth/v1/signup");
    assert_eq!(
        password_grant_endpoint("http://localhost:54321"),
        "http://localhost:54321/auth/v1/token?grant_type=password"
    );
    assert_eq!(
        refresh_grant_endpoint("http://localhost:54321"),
        "http://localhost:54321/auth/v1/token?grant_type=refresh_token"
    );
    assert_eq!(logout_endpoint("http://localhost:54321"), "http://localhost:54321/auth/v1/logout");
    assert_eq!(user_endpoint("http://localhost:54321"), "http://localhost:54321/auth/v1/user");
}

#[test]
fn endpoints_tolerate_trailing_slash_on_base() {
    assert_eq!(signup_endpoint("https://id.example.co/"), "https://id.example.co/auth/v1/signup");
}

#[test]
fn recover_endpoint_embeds_encoded_redirect() {
    assert_eq!(
        recover_endpoint("https://id.example.co", "https://app.example.com/create-password"),
        "https://id.example.co/auth/v1/recover?redirect_to=https%3A%2F%2Fapp.example.com%2Fcreate-password"
    );
}

#[test]
fn urlencode_passes_unreserved_and_escapes_the_rest() {
    assert_eq!(urlencode("AZaz09-_.~"), "AZaz09-_.~");
    assert_eq!(urlencode("a b&c"), "a%20b%26c");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok"), "Bearer tok");
}

#[test]
fn signed_out_already_matches_session_missing_codes() {
    for code in ["session_not_found", "session_expired", "http_401", "http_403"] {
        let err = AuthError {
            code: code.to_owned(),
            message: "gone".to_owned(),
        };
        assert!(signed_out_already(&err), "{code} should count as already signed out");
    }
}

#[test]
fn signed_out_already_rejects_other_failures() {
    for code in ["http_500", "network_error", "invalid_grant"] {
        let err = AuthError {
            code: code.to_owned(),
            message: "boom".to_owned(),
        };
        assert!(!signed_out_already(&err), "{code} should propagate as an error");
    }
}
