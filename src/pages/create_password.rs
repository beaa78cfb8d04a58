//! Create-password page: the destination of recovery links and the form for
//! setting a new credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! Recovery emails land here with tokens in the URL fragment. The fragment is
//! exchanged for a session (identity fetched with the embedded access token)
//! and announced as a password-recovery notification; the credential update
//! itself then runs against the active session like any other gateway call.

#[cfg(test)]
#[path = "create_password_test.rs"]
mod create_password_test;

use leptos::prelude::*;

use crate::components::auth_layout::AuthLayout;
use crate::net::auth_client::AuthEvents;
use crate::net::config::AuthConfig;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{Session, User};
use crate::state::session::SessionState;
use crate::util::validate::validate_password_pair;

/// Fallback lifetime for recovery sessions whose fragment omits `expires_at`.
#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_RECOVERY_TTL_SECS: i64 = 3600;

/// Tokens carried by a password-recovery link fragment.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
struct RecoveryTokens {
    access_token: String,
    refresh_token: String,
    expires_at: Option<i64>,
}

#[cfg(any(test, feature = "hydrate"))]
impl RecoveryTokens {
    /// Build a session around the fetched identity.
    fn into_session(self, user: User, now_unix_seconds: i64) -> Session {
        Session {
            access_token: self.access_token,
            token_type: "bearer".to_owned(),
            expires_at: self.expires_at.unwrap_or(now_unix_seconds + DEFAULT_RECOVERY_TTL_SECS),
            refresh_token: self.refresh_token,
            user,
        }
    }
}

/// Parse a recovery-link fragment of the form
/// `#access_token=...&refresh_token=...&type=recovery[&expires_at=...]`.
///
/// Returns `None` for any other fragment (including non-recovery token
/// fragments), leaving the page as a plain form.
#[cfg(any(test, feature = "hydrate"))]
fn parse_recovery_fragment(hash: &str) -> Option<RecoveryTokens> {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_at = None;
    let mut kind = None;
    for pair in raw.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" => access_token = Some(value.to_owned()),
            "refresh_token" => refresh_token = Some(value.to_owned()),
            "expires_at" => expires_at = value.parse::<i64>().ok(),
            "type" => kind = Some(value.to_owned()),
            _ => {}
        }
    }
    if kind.as_deref() != Some("recovery") {
        return None;
    }
    Some(RecoveryTokens {
        access_token: access_token.filter(|t| !t.is_empty())?,
        refresh_token: refresh_token.filter(|t| !t.is_empty())?,
        expires_at,
    })
}

/// Validate and normalize the new-password form.
fn validate_create_password_input(password: &str, confirm: &str) -> Result<String, &'static str> {
    validate_password_pair(password, confirm)?;
    Ok(password.to_owned())
}

/// Create-password page.
#[component]
pub fn CreatePasswordPage() -> impl IntoView {
    let config = expect_context::<AuthConfig>();
    let events = expect_context::<AuthEvents>();
    let session = expect_context::<RwSignal<SessionState>>();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let succeeded = RwSignal::new(false);
    let busy = RwSignal::new(false);

    // Exchange recovery-link tokens for a session, once, on arrival.
    #[cfg(feature = "hydrate")]
    {
        let tokens = web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .and_then(|hash| parse_recovery_fragment(&hash));
        if let Some(tokens) = tokens {
            let config = config.clone();
            let events = events.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_user(&config, &tokens.access_token).await {
                    Ok(user) => {
                        let fresh = tokens.into_session(user, crate::net::auth_client::now_unix_seconds());
                        events.emit(crate::net::types::AuthChange {
                            event: crate::net::types::AuthEventKind::PasswordRecovery,
                            session: Some(fresh),
                        });
                    }
                    Err(err) => {
                        log::warn!("recovery token exchange failed ({}): {err}", err.code);
                        error.set("Recovery link is invalid or expired.".to_owned());
                    }
                }
            });
        }
    }

    let on_submit = {
        let config = config.clone();
        let events = events.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let password_value = match validate_create_password_input(&password.get(), &confirm.get()) {
                Ok(value) => value,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
            busy.set(true);
            error.set(String::new());

            let config = config.clone();
            let events = events.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let current = session.get_untracked().session;
                match crate::net::api::update_password(&config, &events, current.as_ref(), &password_value).await {
                    Ok(_user) => {
                        succeeded.set(true);
                        password.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(err) => error.set(err.message),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <AuthLayout>
            <div class="auth-form">
                <h1>"Create new password"</h1>
                <p class="auth-form__subtitle">
                    "Your new password must be different from previously used passwords."
                </p>
                <Show when=move || !error.get().is_empty()>
                    <div class="auth-form__banner auth-form__banner--error">{move || error.get()}</div>
                </Show>
                <Show when=move || succeeded.get()>
                    <div class="auth-form__banner auth-form__banner--success">
                        "Password updated. You can now access your "
                        <a href="/">"dashboard"</a>
                        "."
                    </div>
                </Show>
                <form on:submit=on_submit>
                    <label class="auth-form__label">"Password"</label>
                    <input
                        class="auth-form__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label">"Confirm password"</label>
                    <input
                        class="auth-form__input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Update password"
                    </button>
                </form>
            </div>
        </AuthLayout>
    }
}
