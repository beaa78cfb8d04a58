//! Settings page with credential maintenance and sign-out.

use leptos::prelude::*;

use crate::components::tab_bar::TabBar;
use crate::net::auth_client::AuthEvents;
use crate::net::config::AuthConfig;
use crate::state::session::SessionState;

/// Settings page. Sign-out clears the store and returns to the welcome area
/// through the notification channel, including when the service reports the
/// session was already gone.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let config = expect_context::<AuthConfig>();
    let events = expect_context::<AuthEvents>();
    let session = expect_context::<RwSignal<SessionState>>();

    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_sign_out = {
        let config = config.clone();
        let events = events.clone();
        move |_| {
            if busy.get() {
                return;
            }
            busy.set(true);
            error.set(String::new());

            let config = config.clone();
            let events = events.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().session.map(|s| s.access_token);
                match crate::net::api::sign_out(&config, &events, token.as_deref()).await {
                    Ok(()) => {}
                    Err(err) => error.set(format!("Sign out failed: {err}")),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <section class="page page--protected">
            <TabBar/>
            <div class="page__body">
                <h1>"Settings"</h1>
                <p>"Sign out and return to the welcome screen."</p>
                <Show when=move || !error.get().is_empty()>
                    <div class="auth-form__banner auth-form__banner--error">{move || error.get()}</div>
                </Show>
                <a href="/create-password" class="btn">"Change password"</a>
                <button class="btn btn--primary" on:click=on_sign_out disabled=move || busy.get()>
                    "Sign Out"
                </button>
            </div>
        </section>
    }
}
