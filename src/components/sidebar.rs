//! Sidebar chrome for the authenticated shell.
//!
//! Fixed navigation entries with exact-match active highlighting, the
//! signed-in admin email, and the logout control.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{self, Session};
use crate::util::auth::{CORNERS_PATH, DASHBOARD_PATH, LOGIN_PATH, POSTS_PATH, USERS_PATH};

/// Navigation entries in display order: `(label, path)`.
pub const NAV_ENTRIES: [(&str, &str); 4] = [
    ("Dashboard", DASHBOARD_PATH),
    ("Users", USERS_PATH),
    ("Posts", POSTS_PATH),
    ("Corners", CORNERS_PATH),
];

/// Whether the entry at `entry_path` is highlighted for `current_path`.
/// Exact string match; no prefix matching.
pub fn is_active(entry_path: &str, current_path: &str) -> bool {
    entry_path == current_path
}

fn link_class(entry_path: &str, current_path: &str) -> &'static str {
    if is_active(entry_path, current_path) {
        "sidebar__link sidebar__link--active"
    } else {
        "sidebar__link"
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let email = move || session.with(|s| s.email().unwrap_or_default().to_owned());

    // Logout then leave the protected area. Storage and signal are cleared
    // before navigation so the guard never sees a half-torn-down session.
    let on_logout = move |_| {
        session::logout(session);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__logo">
                <span class="sidebar__logo-mark">"S"</span>
                <span class="sidebar__logo-name">"Streetz Talk"</span>
            </div>

            <nav class="sidebar__menu">
                {NAV_ENTRIES
                    .into_iter()
                    .map(|(label, path)| {
                        view! {
                            <a href=path class=move || link_class(path, &pathname.get())>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar__bottom">
                <span class="sidebar__email">{email}</span>
                <button class="btn sidebar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
