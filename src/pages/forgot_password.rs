//! Forgot-password page requesting a reset email.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

use crate::components::auth_layout::AuthLayout;
use crate::net::config::AuthConfig;
use crate::util::validate::validate_email;

/// Validate and normalize the reset form. Malformed addresses are rejected
/// here and never reach the identity service.
fn validate_forgot_password_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    validate_email(email)?;
    Ok(email.to_owned())
}

/// Forgot-password page — sends a reset link that returns to the
/// create-password screen.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let config = expect_context::<AuthConfig>();

    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = {
        let config = config.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let email_value = match validate_forgot_password_input(&email.get()) {
                Ok(value) => value,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
            busy.set(true);
            info.set(String::new());

            let config = config.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::forgot_password(&config, &email_value).await {
                    Ok(()) => {
                        info.set("Reset link sent. Check your email.".to_owned());
                        email.set(String::new());
                    }
                    Err(err) => info.set(format!("Request failed: {err}")),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <AuthLayout>
            <div class="auth-form">
                <h1>"Forgot Password?"</h1>
                <p class="auth-form__subtitle">"Enter the email associated with your account."</p>
                <Show when=move || !info.get().is_empty()>
                    <div class="auth-form__banner">{move || info.get()}</div>
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
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Send reset link"
                    </button>
                </form>
                <p class="auth-form__footer">
                    <a href="/sign-in">"Back to sign in"</a>
                </p>
            </div>
        </AuthLayout>
    }
}
