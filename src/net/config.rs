//! Compile-time public configuration for the hosted identity service.
//!
//! Three public settings: where the service lives, the publishable API key
//! every request carries, and the app origin that password-recovery links
//! should return to. Values are baked in at build time via `option_env!`
//! with local-dev defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Public (non-secret) settings for talking to the identity service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Identity service origin, e.g. `https://project.example.co`.
    pub base_url: String,
    /// Publishable API key sent in the `apikey` header on every request.
    pub publishable_key: String,
    /// Origin of this app, used to build recovery-link destinations.
    pub redirect_base: String,
}

impl AuthConfig {
    /// Read the build-time public settings, defaulting to a local stack.
    pub fn from_public_env() -> Self {
        Self {
            base_url: option_env!("PUBLIC_AUTH_URL")
                .unwrap_or("http://localhost:54321")
                .to_owned(),
            publishable_key: option_env!("PUBLIC_AUTH_KEY").unwrap_or("").to_owned(),
            redirect_base: option_env!("PUBLIC_APP_URL")
                .unwrap_or("http://localhost:3000")
                .to_owned(),
        }
    }

    /// Destination embedded in password-reset emails.
    pub fn create_password_redirect(&self) -> String {
        format!("{}/create-password", self.redirect_base.trim_end_matches('/'))
    }
}
