//! Wire-schema DTOs for the hosted identity service.
//!
//! DESIGN
//! ======
//! These types mirror the identity service's JSON payloads so serde handles
//! the client/service boundary directly. The service reports failures in two
//! body shapes (an `error_code`/`msg` pair on most endpoints, an OAuth-style
//! `error`/`error_description` pair on the token endpoint); `AuthError`
//! normalizes both into one machine-readable code plus human message.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Token bundle issued by the identity service on sign-in or refresh.
///
/// Replaced wholesale on every auth event, never mutated in place. The
/// associated [`User`] always travels inside the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token presented on authenticated requests.
    pub access_token: String,
    /// Token scheme, `"bearer"` in practice.
    pub token_type: String,
    /// Absolute expiry as unix seconds.
    pub expires_at: i64,
    /// Opaque token exchanged for a fresh session.
    pub refresh_token: String,
    /// Identity the session was issued for.
    pub user: User,
}

impl Session {
    /// Whether the access token has passed its expiry instant.
    pub fn is_expired(&self, now_unix_seconds: i64) -> bool {
        self.expires_at <= now_unix_seconds
    }
}

/// Profile identity associated with a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Sign-in email address, when the service exposes it.
    #[serde(default)]
    pub email: Option<String>,
    /// ISO 8601 creation timestamp, when the service exposes it.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Kind of asynchronous auth notification delivered by the service client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEventKind {
    /// Credentials were exchanged for a session.
    SignedIn,
    /// The session was invalidated (explicitly or remotely).
    SignedOut,
    /// A recovery link was exchanged for a limited session.
    PasswordRecovery,
    /// The access token was renewed in the background.
    TokenRefreshed,
    /// The profile behind the current session changed.
    UserUpdated,
}

/// One auth-state notification: an event kind plus the session that now
/// applies (or `None` when the session ended).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthChange {
    pub event: AuthEventKind,
    pub session: Option<Session>,
}

/// Rejection reported by the identity service.
///
/// `code` is machine-readable (service error codes such as
/// `invalid_credentials`, with `http_<status>` as the fallback when the body
/// carries none); `message` is human-readable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub code: String,
    pub message: String,
}

impl AuthError {
    /// Parse an error response body, tolerating both service body shapes.
    pub fn from_body(status: u16, body: &str) -> Self {
        let fallback_code = format!("http_{status}");
        let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
            return Self {
                code: fallback_code,
                message: status_message(status),
            };
        };
        let code = value
            .get("error_code")
            .and_then(serde_json::Value::as_str)
            .or_else(|| value.get("error").and_then(serde_json::Value::as_str))
            .map_or(fallback_code, str::to_owned);
        let message = value
            .get("msg")
            .or_else(|| value.get("error_description"))
            .or_else(|| value.get("message"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| status_message(status), str::to_owned);
        Self { code, message }
    }

    /// Transport-level failure before any status was received.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            code: "network_error".to_owned(),
            message: message.into(),
        }
    }

    /// A 2xx response whose body did not match the expected schema.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self {
            code: "invalid_response".to_owned(),
            message: message.into(),
        }
    }

    /// Stub outcome for gateway calls made outside the browser build.
    pub fn unavailable() -> Self {
        Self {
            code: "unavailable".to_owned(),
            message: "not available on server".to_owned(),
        }
    }
}

fn status_message(status: u16) -> String {
    format!("request failed: {status}")
}
