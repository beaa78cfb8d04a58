//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::net::auth_client::spawn_session_controller;
use crate::net::config::AuthConfig;
use crate::pages::{
    create_password::CreatePasswordPage, forgot_password::ForgotPasswordPage, home::HomePage, settings::SettingsPage,
    sign_in::SignInPage, sign_up::SignUpPage, welcome::WelcomePage,
};
use crate::state::{session::SessionState, ui::UiState};
use crate::util::guard::install_route_guard;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(ui);
    provide_context(AuthConfig::from_public_env());

    // Apply the persisted color scheme before first paint.
    #[cfg(feature = "hydrate")]
    {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|state| state.dark_mode = enabled);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/gatehouse.css"/>
        <Title text="Gatehouse"/>

        <Router>
            <SessionProvider>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("welcome") view=WelcomePage/>
                    <Route path=StaticSegment("sign-in") view=SignInPage/>
                    <Route path=StaticSegment("sign-up") view=SignUpPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("create-password") view=CreatePasswordPage/>
                </Routes>
            </SessionProvider>
        </Router>
    }
}

/// Owns the session lifecycle: starts the controller exactly once, provides
/// the notification handle to descendants, installs the route guard, and
/// holds screens behind a splash until startup completes. Dropping this
/// component tears the subscription down.
#[component]
fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<AuthConfig>();
    let navigate = use_navigate();

    let events = spawn_session_controller(config, session, navigate);
    provide_context(events.clone());
    install_route_guard(session, use_navigate());
    on_cleanup(move || events.close());

    view! {
        <Show
            when=move || session.get().initialized
            fallback=|| view! { <div class="splash" aria-busy="true"></div> }
        >
            {children()}
        </Show>
    }
}
