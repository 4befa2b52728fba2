//! Username/password authentication flow
//!
//! Validates credentials locally, then exchanges them for an opaque token.
//! The resulting [`AuthSession`] lives in memory only; handing it to a
//! view-model is the caller's job.

use postdeck_api::BlogApi;
use postdeck_core::prelude::*;
use postdeck_core::types::AuthSession;

/// Sign-in and registration against the auth endpoints
pub struct AuthFlow<A> {
    api: A,
}

impl<A: BlogApi> AuthFlow<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Sign in with username and password
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] for empty username or password.
    /// - [`Error::Fetch`] / [`Error::DataFormat`] on endpoint failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession> {
        let username = validate_credentials(username, password)?;
        self.api
            .login(username, password)
            .await
            .with_context(|| format!("login as {username}"))
    }

    /// Create an account; the response shape matches login
    ///
    /// # Errors
    ///
    /// Same as [`login`](Self::login).
    pub async fn register(&self, username: &str, password: &str) -> Result<AuthSession> {
        let username = validate_credentials(username, password)?;
        self.api
            .register(username, password)
            .await
            .with_context(|| format!("register {username}"))
    }
}

/// Reject empty credentials; returns the trimmed username
fn validate_credentials<'a>(username: &'a str, password: &str) -> Result<&'a str> {
    let username = username.trim();
    if username.is_empty() {
        return Err(Error::validation("username must not be empty"));
    }
    if password.is_empty() {
        return Err(Error::validation("password must not be empty"));
    }
    Ok(username)
}
