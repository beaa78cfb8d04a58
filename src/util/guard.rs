//! Route guarding on session presence.
//!
//! SYSTEM CONTEXT
//! ==============
//! One decision function of (session state, current path), re-derived on
//! every relevant change — never cached, since session presence and location
//! move independently. Installed once as an effect by the session provider.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::session::SessionState;

/// Which part of the navigation tree a path belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteArea {
    /// The welcome entry screen.
    Welcome,
    /// Credential screens reachable with or without a session; the recovery
    /// flow needs create-password to stay reachable while signed in.
    Auth,
    /// Screens that require a session.
    Protected,
}

impl RouteArea {
    /// Classify a pathname by its first segment.
    pub fn classify(path: &str) -> Self {
        let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
        match first {
            "welcome" => Self::Welcome,
            "sign-in" | "sign-up" | "forgot-password" | "create-password" => Self::Auth,
            _ => Self::Protected,
        }
    }
}

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Startup has not completed; render nothing and decide later.
    Defer,
    /// The current screen is permitted.
    Allow,
    /// No session on a protected screen.
    RedirectWelcome,
    /// Active session on the welcome screen.
    RedirectProtected,
}

/// Decide whether the current path is permitted for the current session.
pub fn route_decision(state: &SessionState, path: &str) -> RouteDecision {
    if !state.initialized {
        return RouteDecision::Defer;
    }
    match (state.signed_in(), RouteArea::classify(path)) {
        (false, RouteArea::Protected) => RouteDecision::RedirectWelcome,
        (true, RouteArea::Welcome) => RouteDecision::RedirectProtected,
        _ => RouteDecision::Allow,
    }
}

/// Install the guard effect: re-evaluate on every session or location change
/// and issue the redirect the decision calls for.
pub fn install_route_guard<N>(session: RwSignal<SessionState>, navigate: N)
where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        match route_decision(&session.get(), &path) {
            RouteDecision::Defer | RouteDecision::Allow => {}
            RouteDecision::RedirectWelcome => navigate("/welcome", NavigateOptions::default()),
            RouteDecision::RedirectProtected => navigate("/", NavigateOptions::default()),
        }
    });
}
