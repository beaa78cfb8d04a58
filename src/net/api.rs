//! Gateway operations against the hosted identity service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning [`AuthError::unavailable`] since credentials only exist in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every rejection surfaces as [`AuthError`], unmodified, with one exception:
//! a sign-out the service rejects because no session is active is already the
//! outcome the caller wanted, so it is reclassified as success. Nothing here
//! retries; callers decide whether to try again.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::auth_client::AuthEvents;
use super::config::AuthConfig;
use super::types::{AuthError, Session, User};
#[cfg(feature = "hydrate")]
use super::types::{AuthChange, AuthEventKind};

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base: &str) -> String {
    format!("{}/auth/v1/signup", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn password_grant_endpoint(base: &str) -> String {
    format!("{}/auth/v1/token?grant_type=password", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_grant_endpoint(base: &str) -> String {
    format!("{}/auth/v1/token?grant_type=refresh_token", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{}/auth/v1/logout", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn recover_endpoint(base: &str, redirect_to: &str) -> String {
    format!(
        "{}/auth/v1/recover?redirect_to={}",
        base.trim_end_matches('/'),
        urlencode(redirect_to)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str) -> String {
    format!("{}/auth/v1/user", base.trim_end_matches('/'))
}

/// Percent-encode a query value (RFC 3986 unreserved set passes through).
#[cfg(any(test, feature = "hydrate"))]
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a sign-out rejection means the session was already gone.
///
/// Classified by feature rather than error-name matching: the service's
/// session-missing codes count, and so do bare 401/403 responses, since both
/// mean the token no longer identifies an active session.
#[cfg(any(test, feature = "hydrate"))]
fn signed_out_already(err: &AuthError) -> bool {
    matches!(
        err.code.as_str(),
        "session_not_found" | "session_expired" | "http_401" | "http_403"
    )
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> AuthError {
    AuthError::network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> AuthError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    AuthError::from_body(status, &body)
}

#[cfg(feature = "hydrate")]
fn signed_out_change() -> AuthChange {
    AuthChange {
        event: AuthEventKind::SignedOut,
        session: None,
    }
}

/// Register a new credential pair.
///
/// The service sends a confirmation email out-of-band; there is no local
/// session change until the user later signs in.
///
/// # Errors
///
/// Returns [`AuthError`] on rejection (duplicate account, weak credential, ...).
pub async fn sign_up(config: &AuthConfig, email: &str, password: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&signup_endpoint(&config.base_url))
            .header("apikey", &config.publishable_key)
            .json(&payload)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(AuthError::unavailable())
    }
}

/// Exchange credentials for a session.
///
/// On success the new session is published on the notification channel (the
/// store updates through that channel, never from here); the caller is
/// responsible for navigating to the protected area afterwards.
///
/// # Errors
///
/// Returns [`AuthError`] on invalid credentials or transport failure.
pub async fn sign_in_with_password(
    config: &AuthConfig,
    events: &AuthEvents,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&password_grant_endpoint(&config.base_url))
            .header("apikey", &config.publishable_key)
            .json(&payload)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let session: Session = resp.json().await.map_err(|e| AuthError::invalid_response(e.to_string()))?;
        events.emit(AuthChange {
            event: AuthEventKind::SignedIn,
            session: Some(session.clone()),
        });
        Ok(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, events, email, password);
        Err(AuthError::unavailable())
    }
}

/// Invalidate the current session remotely.
///
/// A "no active session" rejection is treated as success: the desired end
/// state (signed out) already holds, so local state is cleared and the
/// welcome navigation fires exactly as on a clean sign-out.
///
/// # Errors
///
/// Returns [`AuthError`] for any other rejection.
pub async fn sign_out(config: &AuthConfig, events: &AuthEvents, access_token: Option<&str>) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(&logout_endpoint(&config.base_url))
            .header("apikey", &config.publishable_key);
        if let Some(token) = access_token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req.send().await.map_err(transport_error)?;
        if resp.ok() {
            events.emit(signed_out_change());
            return Ok(());
        }
        let err = error_from_response(resp).await;
        if signed_out_already(&err) {
            log::debug!("sign out: session already gone ({})", err.code);
            events.emit(signed_out_change());
            return Ok(());
        }
        Err(err)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, events, access_token);
        Err(AuthError::unavailable())
    }
}

/// Request a password-reset email for `email`.
///
/// The reset link returns to this app's create-password screen. Callers
/// validate the address locally first; malformed input never reaches the
/// service.
///
/// # Errors
///
/// Returns [`AuthError`] on remote rejection (unknown address handling, rate
/// limit, ...).
pub async fn forgot_password(config: &AuthConfig, email: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = recover_endpoint(&config.base_url, &config.create_password_redirect());
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post(&endpoint)
            .header("apikey", &config.publishable_key)
            .json(&payload)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email);
        Err(AuthError::unavailable())
    }
}

/// Change the password of the currently authenticated identity.
///
/// Requires an active session; the service rejects the call otherwise. On
/// success a user-updated notification carries the session with its refreshed
/// profile.
///
/// # Errors
///
/// Returns [`AuthError`] when no session is active or the service rejects the
/// new credential.
pub async fn update_password(
    config: &AuthConfig,
    events: &AuthEvents,
    session: Option<&Session>,
    new_password: &str,
) -> Result<User, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::put(&user_endpoint(&config.base_url))
            .header("apikey", &config.publishable_key);
        if let Some(active) = session {
            req = req.header("Authorization", &bearer(&active.access_token));
        }
        let payload = serde_json::json!({ "password": new_password });
        let resp = req
            .json(&payload)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let user: User = resp.json().await.map_err(|e| AuthError::invalid_response(e.to_string()))?;
        if let Some(active) = session {
            let mut updated = active.clone();
            updated.user = user.clone();
            events.emit(AuthChange {
                event: AuthEventKind::UserUpdated,
                session: Some(updated),
            });
        }
        Ok(user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, events, session, new_password);
        Err(AuthError::unavailable())
    }
}

/// Exchange a refresh token for a fresh session.
///
/// Used by the session controller's startup fetch and background renewal;
/// publishes nothing itself.
///
/// # Errors
///
/// Returns [`AuthError`] when the refresh token is no longer honored.
pub async fn refresh_session(config: &AuthConfig, refresh_token: &str) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "refresh_token": refresh_token });
        let resp = gloo_net::http::Request::post(&refresh_grant_endpoint(&config.base_url))
            .header("apikey", &config.publishable_key)
            .json(&payload)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json().await.map_err(|e| AuthError::invalid_response(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, refresh_token);
        Err(AuthError::unavailable())
    }
}

/// Fetch the profile a bearer token identifies.
///
/// Used by the recovery-link flow to hydrate a session from fragment tokens.
///
/// # Errors
///
/// Returns [`AuthError`] when the token is invalid or expired.
pub async fn fetch_user(config: &AuthConfig, access_token: &str) -> Result<User, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&user_endpoint(&config.base_url))
            .header("apikey", &config.publishable_key)
            .header("Authorization", &bearer(access_token))
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json().await.map_err(|e| AuthError::invalid_response(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, access_token);
        Err(AuthError::unavailable())
    }
}
