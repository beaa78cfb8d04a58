//! Welcome entry screen with links into the credential flows.

use leptos::prelude::*;

use crate::components::auth_layout::AuthLayout;

/// Welcome page — the unauthenticated landing screen.
#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <AuthLayout>
            <div class="welcome">
                <h1 class="welcome__title">"Gatehouse"</h1>
                <div class="welcome__actions">
                    <a href="/sign-in" class="btn btn--primary">"Log in"</a>
                    <a href="/sign-up" class="btn">"Sign Up"</a>
                </div>
            </div>
        </AuthLayout>
    }
}
