use super::*;

#[test]
fn accepts_ordinary_addresses() {
    assert_eq!(validate_email("alice@example.com"), Ok(()));
    assert_eq!(validate_email("  alice@example.com  "), Ok(()));
    assert_eq!(validate_email("a.b+tag@mail.example.co"), Ok(()));
}

#[test]
fn rejects_empty_email() {
    assert_eq!(validate_email(""), Err("Email is required."));
    assert_eq!(validate_email("   "), Err("Email is required."));
}

#[test]
fn rejects_malformed_addresses() {
    for input in [
        "not-an-email",
        "no-at.example.com",
        "two@@example.com",
        "a@b@example.com",
        "@example.com",
        "alice@",
        "alice@nodot",
        "alice@.com",
        "alice@example.",
        "spaced name@example.com",
    ] {
        assert_eq!(validate_email(input), Err("Enter a valid email address."), "{input}");
    }
}

#[test]
fn password_policy_reports_first_violation() {
    assert_eq!(validate_password("Aa1!x"), Err("Must be at least 8 characters in length."));
    let long = format!("Aa1!{}", "x".repeat(70));
    assert_eq!(validate_password(&long), Err("Must be less than 64 characters."));
    assert_eq!(validate_password("alllower1!"), Err("One uppercase character required."));
    assert_eq!(validate_password("ALLUPPER1!"), Err("One lowercase character required."));
    assert_eq!(validate_password("NoNumbers!"), Err("One number required."));
    assert_eq!(validate_password("NoSpecial1"), Err("One special character required."));
}

#[test]
fn password_policy_accepts_a_compliant_password() {
    assert_eq!(validate_password("Sup3r-secret"), Ok(()));
}

#[test]
fn pair_requires_matching_confirmation() {
    assert_eq!(validate_password_pair("Sup3r-secret", "Sup3r-secret"), Ok(()));
    assert_eq!(
        validate_password_pair("Sup3r-secret", "Sup3r-secre"),
        Err("Your passwords do not match.")
    );
}

#[test]
fn pair_surfaces_policy_violations_before_mismatch() {
    assert_eq!(
        validate_password_pair("weak", "different"),
        Err("Must be at least 8 characters in length.")
    );
}
