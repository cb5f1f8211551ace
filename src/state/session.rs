//! Auth-session state for the signed-in admin.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for authentication. The route guard and the
//! authenticated shell read it; the login page and the logout control are
//! the only writers. The process-wide instance is an `RwSignal<Session>`
//! provided via context, so every consumer re-renders on login/logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::storage;

/// Durable-storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Durable-storage key holding the admin email.
pub const EMAIL_KEY: &str = "email";

/// In-memory login state: bearer token plus the admin email it was issued
/// for. `is_authenticated` is derived, never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    email: Option<String>,
}

impl Session {
    /// Rebuild a session from durable-storage values. An absent or empty
    /// token yields the anonymous session regardless of the stored email.
    pub fn from_parts(token: Option<String>, email: Option<String>) -> Self {
        match token {
            Some(token) if !token.trim().is_empty() => Self { token: Some(token), email },
            _ => Self::default(),
        }
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Store a freshly issued token and the email it belongs to. Empty
    /// tokens are rejected and leave the session unchanged.
    pub fn login(&mut self, token: &str, email: &str) {
        if token.trim().is_empty() {
            return;
        }
        self.token = Some(token.to_owned());
        self.email = Some(email.to_owned());
    }

    /// Drop the token and email. Calling this while anonymous is a no-op.
    pub fn logout(&mut self) {
        self.token = None;
        self.email = None;
    }
}

/// Read the persisted session once at startup.
pub fn restore_session() -> Session {
    Session::from_parts(storage::load_string(TOKEN_KEY), storage::load_string(EMAIL_KEY))
}

/// Persist the credentials, then publish the authenticated session.
///
/// Rejects empty tokens without touching storage, so durable and
/// in-memory state cannot diverge through this path.
pub fn login(session: RwSignal<Session>, token: &str, email: &str) {
    if token.trim().is_empty() {
        return;
    }
    storage::save_string(TOKEN_KEY, token);
    storage::save_string(EMAIL_KEY, email);
    session.update(|s| s.login(token, email));
}

/// Remove the persisted credentials, then publish the anonymous session.
pub fn logout(session: RwSignal<Session>) {
    storage::remove(TOKEN_KEY);
    storage::remove(EMAIL_KEY);
    session.update(Session::logout);
}
