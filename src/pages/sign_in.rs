//! Sign-in page exchanging email + password for a session.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;
use crate::net::auth_client::AuthEvents;
use crate::net::config::AuthConfig;
use crate::util::validate::validate_email;

/// Validate and normalize the sign-in form.
fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    validate_email(email)?;
    if password.is_empty() {
        return Err("Password is required.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Sign-in page. On success the session arrives through the notification
/// channel; this page only navigates to the protected area.
#[component]
pub fn SignInPage() -> impl IntoView {
    let config = expect_context::<AuthConfig>();
    let events = expect_context::<AuthEvents>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = {
        let config = config.clone();
        let events = events.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
            busy.set(true);
            error.set(String::new());

            let config = config.clone();
            let events = events.clone();
            let navigate = navigate.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in_with_password(&config, &events, &email_value, &password_value).await {
                    Ok(_session) => navigate("/", NavigateOptions::default()),
                    Err(err) => {
                        log::debug!("sign in rejected ({}): {err}", err.code);
                        error.set("Incorrect email or password".to_owned());
                    }
                }
                busy.set(false);
            });
        }
    };

    view! {
        <AuthLayout>
            <div class="auth-form">
                <h1>"Sign in"</h1>
                <p class="auth-form__subtitle">"Sign in to start using this app"</p>
                <Show when=move || !error.get().is_empty()>
                    <div class="auth-form__banner auth-form__banner--error">{move || error.get()}</div>
                </Show>
                <form on:submit=on_submit>
                    <label class="auth-form__label">"Email"</label>
                    <input
                        class="auth-form__input"
                        type="email"
                        placeholder="Enter email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label">"Password"</label>
                    <div class="auth-form__password">
                        <input
                            class="auth-form__input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="auth-form__reveal"
                            type="button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <a href="/forgot-password" class="auth-form__aside">"Forgot Password?"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                </form>
                <p class="auth-form__footer">
                    "Don't have an account? "
                    <a href="/sign-up">"Sign up"</a>
                </p>
            </div>
        </AuthLayout>
    }
}
