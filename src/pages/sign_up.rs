//! Sign-up page registering a new credential pair.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;

use crate::components::auth_layout::AuthLayout;
use crate::net::config::AuthConfig;
use crate::util::validate::{validate_email, validate_password_pair};

/// Validate and normalize the sign-up form.
fn validate_sign_up_input(
    email: &str,
    password: &str,
    confirm: &str,
    accepted_terms: bool,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    validate_email(email)?;
    validate_password_pair(password, confirm)?;
    if !accepted_terms {
        return Err("Acceptance of terms is required.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Sign-up page. Success means a confirmation email is on its way; the user
/// signs in afterwards, so no session state changes here.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let config = expect_context::<AuthConfig>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let terms = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let succeeded = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = {
        let config = config.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let (email_value, password_value) =
                match validate_sign_up_input(&email.get(), &password.get(), &confirm.get(), terms.get()) {
                    Ok(values) => values,
                    Err(message) => {
                        error.set(message.to_owned());
                        return;
                    }
                };
            busy.set(true);
            error.set(String::new());

            let config = config.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&config, &email_value, &password_value).await {
                    Ok(()) => {
                        succeeded.set(true);
                        email.set(String::new());
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
                <h1>"Sign up"</h1>
                <p class="auth-form__subtitle">"Sign up and start using this app"</p>
                <Show when=move || !error.get().is_empty()>
                    <div class="auth-form__banner auth-form__banner--error">{move || error.get()}</div>
                </Show>
                <Show when=move || succeeded.get()>
                    <div class="auth-form__banner auth-form__banner--success">
                        "Account created. Check your email to confirm your address, then sign in."
                    </div>
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
                    <input
                        class="auth-form__input"
                        type="password"
                        placeholder="Enter password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label">"Confirm password"</label>
                    <input
                        class="auth-form__input"
                        type="password"
                        placeholder="Re-enter password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <label class="auth-form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || terms.get()
                            on:change=move |ev| terms.set(event_target_checked(&ev))
                        />
                        "I accept the terms of use"
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <p class="auth-form__footer">
                    "Already have an account? "
                    <a href="/sign-in">"Sign in"</a>
                </p>
            </div>
        </AuthLayout>
    }
}
