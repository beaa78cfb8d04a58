//! Home page — the authenticated landing screen.

use leptos::prelude::*;

use crate::components::tab_bar::TabBar;
use crate::state::session::SessionState;

/// Home page. The route guard keeps unauthenticated visitors out.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = move || {
        session
            .get()
            .user
            .as_ref()
            .and_then(|u| u.email.clone())
            .unwrap_or_else(|| "—".to_owned())
    };

    view! {
        <section class="page page--protected">
            <TabBar/>
            <div class="page__body">
                <h1>"Home"</h1>
                <p>
                    "You are signed in as " <strong>{email}</strong>
                    ". This session persists even after closing the app."
                </p>
            </div>
        </section>
    }
}
