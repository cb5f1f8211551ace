//! Admin login page: identity + password against the admin auth endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::{self, Session};

/// Inline error shown when the backend rejects the credentials. Network
/// failures surface the same way; the form stays usable for another try.
pub const INVALID_CREDENTIALS: &str = "Invalid login credentials";

/// Trim both fields and require each to be non-empty.
fn validate_login_input(identity: &str, password: &str) -> Result<(String, String), &'static str> {
    let identity = identity.trim();
    let password = password.trim();
    if identity.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((identity.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let identity = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (identity_value, password_value) =
            match validate_login_input(&identity.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::auth_with_password(&identity_value, &password_value).await {
                Ok(auth) => {
                    session::login(session, &auth.token, &auth.admin.email);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(crate::util::auth::DASHBOARD_PATH);
                    }
                }
                Err(e) => {
                    log::warn!("admin auth failed: {e}");
                    error.set(INVALID_CREDENTIALS.to_owned());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (identity_value, password_value, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__brand">
                    <span class="login-card__logo">"S"</span>
                    <span class="login-card__name">"Streetz Talk"</span>
                </div>
                <h1>"Admin Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email address"
                        prop:value=move || identity.get()
                        on:input=move |ev| identity.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-error">{move || error.get()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
