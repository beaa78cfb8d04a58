use super::*;

const GOOD_PASSWORD: &str = "Sup3r-secret";

#[test]
fn accepts_a_complete_form() {
    assert_eq!(
        validate_sign_up_input(" alice@example.com ", GOOD_PASSWORD, GOOD_PASSWORD, true),
        Ok(("alice@example.com".to_owned(), GOOD_PASSWORD.to_owned()))
    );
}

#[test]
fn rejects_malformed_email_first() {
    assert_eq!(
        validate_sign_up_input("nope", GOOD_PASSWORD, GOOD_PASSWORD, true),
        Err("Enter a valid email address.")
    );
}

#[test]
fn rejects_policy_violations() {
    assert_eq!(
        validate_sign_up_input("alice@example.com", "weakpass", "weakpass", true),
        Err("One uppercase character required.")
    );
}

#[test]
fn rejects_mismatched_confirmation() {
    assert_eq!(
        validate_sign_up_input("alice@example.com", GOOD_PASSWORD, "Sup3r-secre", true),
        Err("Your passwords do not match.")
    );
}

#[test]
fn rejects_unaccepted_terms() {
    assert_eq!(
        validate_sign_up_input("alice@example.com", GOOD_PASSWORD, GOOD_PASSWORD, false),
        Err("Acceptance of terms is required.")
    );
}
