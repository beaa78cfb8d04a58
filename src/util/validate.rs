//! Credential input validation shared by the auth screens.
//!
//! The gateway trusts these checks: malformed addresses and out-of-policy
//! passwords are rejected here and never reach the identity service. Rules
//! mirror the service's defaults so local rejections match remote ones.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 64;

const SPECIAL_CHARS: &str = "`~<>?,./!@#$%^&*()-_+=\"'|{}[];:\\";

/// Structural email check.
///
/// # Errors
///
/// Returns a display-ready message for empty or malformed input.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required.");
    }
    if email.matches('@').count() != 1 || email.contains(char::is_whitespace) {
        return Err("Enter a valid email address.");
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Enter a valid email address.");
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err("Enter a valid email address.");
    }
    Ok(())
}

/// Password policy: 8-64 chars with one uppercase, one lowercase, one digit,
/// and one special character.
///
/// # Errors
///
/// Returns the first violated rule as a display-ready message.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < PASSWORD_MIN {
        return Err("Must be at least 8 characters in length.");
    }
    if password.len() > PASSWORD_MAX {
        return Err("Must be less than 64 characters.");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("One uppercase character required.");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("One lowercase character required.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("One number required.");
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err("One special character required.");
    }
    Ok(())
}

/// Validate a new password together with its confirmation.
///
/// # Errors
///
/// Returns the first violated policy rule, or a mismatch message.
pub fn validate_password_pair(password: &str, confirm: &str) -> Result<(), &'static str> {
    validate_password(password)?;
    if password != confirm {
        return Err("Your passwords do not match.");
    }
    Ok(())
}
