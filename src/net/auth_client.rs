//! Session lifecycle: one-time startup fetch, the auth notification channel,
//! and background token renewal.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single writer of the session store. Gateway operations and the
//! recovery-link flow publish [`AuthChange`] values through [`AuthEvents`];
//! the controller task consumes them in delivery order and replaces the
//! store's session/user fields together, so readers never observe a partial
//! update. Exactly one controller runs per application lifetime.
//!
//! ERROR HANDLING
//! ==============
//! The startup refresh is best-effort: failures are logged at debug and the
//! app proceeds with whatever cached session is still valid, possibly none.
//! Nothing in this module is fatal.

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::{GetUntracked, Update};
use leptos_router::NavigateOptions;

use super::config::AuthConfig;
use super::types::AuthChange;
#[cfg(any(test, feature = "hydrate"))]
use super::types::{AuthEventKind, Session};
use crate::state::session::SessionState;

/// How often the renewal task checks whether the access token needs refresh.
#[cfg(feature = "hydrate")]
const REFRESH_CHECK_SECS: u64 = 30;

/// Renew when the access token is within this many seconds of expiry.
#[cfg(any(test, feature = "hydrate"))]
const REFRESH_MARGIN_SECS: i64 = 60;

/// Handle for publishing auth notifications to the session controller.
///
/// Clonable; provided via context so the gateway and the recovery flow can
/// publish. Outside the browser build every operation is a no-op.
#[derive(Clone)]
pub struct AuthEvents {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<AuthChange>>,
}

impl AuthEvents {
    /// A handle wired to nothing. Used by the SSR path and in tests.
    pub fn disconnected() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            tx: None,
        }
    }

    /// Publish one auth notification.
    pub fn emit(&self, change: AuthChange) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(tx) = &self.tx {
                if tx.unbounded_send(change).is_err() {
                    log::warn!("auth notification dropped: controller channel closed");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = change;
        }
    }

    /// Tear down the subscription; the controller task ends after draining.
    pub fn close(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(tx) = &self.tx {
                tx.close_channel();
            }
        }
    }
}

/// Whether an event kind routes the user back to the welcome area.
#[cfg(any(test, feature = "hydrate"))]
fn returns_to_welcome(event: AuthEventKind) -> bool {
    matches!(event, AuthEventKind::SignedOut | AuthEventKind::PasswordRecovery)
}

/// Startup fallback when the refresh failed: keep the cached session only
/// while it is still valid.
#[cfg(any(test, feature = "hydrate"))]
fn retain_unrefreshed(cached: Session, now_unix_seconds: i64) -> Option<Session> {
    if cached.is_expired(now_unix_seconds) {
        None
    } else {
        Some(cached)
    }
}

/// Whether the background renewal task should refresh now.
#[cfg(any(test, feature = "hydrate"))]
fn needs_refresh(session: &Session, now_unix_seconds: i64) -> bool {
    session.expires_at - now_unix_seconds <= REFRESH_MARGIN_SECS
}

/// Current time as unix seconds (browser clock).
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn now_unix_seconds() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Start the session controller and return the publishing handle.
///
/// Runs once per application lifetime, from the provider component that owns
/// the session store. The spawned task restores the persisted session (with a
/// best-effort refresh), latches the store to initialized, then consumes auth
/// notifications until [`AuthEvents::close`] is called. Signed-out and
/// password-recovery notifications additionally navigate to the welcome area.
pub fn spawn_session_controller<N>(config: AuthConfig, session: RwSignal<SessionState>, navigate: N) -> AuthEvents
where
    N: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use futures::StreamExt;

        let (tx, mut rx) = futures::channel::mpsc::unbounded::<AuthChange>();

        let refresh_config = config.clone();
        let refresh_tx = tx.clone();
        leptos::task::spawn_local(async move {
            let restored = startup_session(&config).await;
            session.update(|state| {
                state.apply(restored);
                state.mark_initialized();
            });

            while let Some(change) = rx.next().await {
                match &change.session {
                    Some(fresh) => crate::util::session_cache::store(fresh),
                    None => crate::util::session_cache::clear(),
                }
                session.update(|state| state.apply(change.session));
                if returns_to_welcome(change.event) {
                    navigate("/welcome", NavigateOptions::default());
                }
            }
        });
        leptos::task::spawn_local(renewal_loop(refresh_config, session, refresh_tx));

        AuthEvents { tx: Some(tx) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session, navigate);
        AuthEvents::disconnected()
    }
}

/// Restore the persisted session, refreshing it best-effort.
#[cfg(feature = "hydrate")]
async fn startup_session(config: &AuthConfig) -> Option<Session> {
    let cached = crate::util::session_cache::load()?;
    let outcome = match super::api::refresh_session(config, &cached.refresh_token).await {
        Ok(fresh) => Some(fresh),
        Err(err) => {
            log::debug!("startup session refresh failed ({}): {err}", err.code);
            retain_unrefreshed(cached, now_unix_seconds())
        }
    };
    match &outcome {
        Some(fresh) => crate::util::session_cache::store(fresh),
        None => crate::util::session_cache::clear(),
    }
    outcome
}

/// Keep the access token alive while a session exists.
///
/// Ends when the notification channel closes.
#[cfg(feature = "hydrate")]
async fn renewal_loop(
    config: AuthConfig,
    session: RwSignal<SessionState>,
    tx: futures::channel::mpsc::UnboundedSender<AuthChange>,
) {
    loop {
        gloo_timers::future::sleep(std::time::Duration::from_secs(REFRESH_CHECK_SECS)).await;
        if tx.is_closed() {
            break;
        }
        let Some(current) = session.get_untracked().session else {
            continue;
        };
        if !needs_refresh(&current, now_unix_seconds()) {
            continue;
        }
        match super::api::refresh_session(&config, &current.refresh_token).await {
            Ok(fresh) => {
                let change = AuthChange {
                    event: AuthEventKind::TokenRefreshed,
                    session: Some(fresh),
                };
                if tx.unbounded_send(change).is_err() {
                    break;
                }
            }
            Err(err) => log::debug!("background token refresh failed ({}): {err}", err.code),
        }
    }
}
