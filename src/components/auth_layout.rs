//! Shared layout for the unauthenticated screens.

use leptos::prelude::*;

/// Centered card with a decorative backdrop, wrapping welcome and credential
/// forms.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="auth-layout">
            <div class="auth-layout__backdrop" aria-hidden="true"></div>
            <div class="auth-layout__panel">{children()}</div>
        </div>
    }
}
