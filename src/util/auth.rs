//! Route-guard decisions and the shared unauthenticated redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route must apply identical redirect behavior: anonymous
//! visitors go to `/login` (the requested path is discarded), and unknown
//! paths resolve by redirect rather than an error view.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const USERS_PATH: &str = "/users";
pub const POSTS_PATH: &str = "/posts";
pub const CORNERS_PATH: &str = "/corners";

/// Paths served inside the authenticated shell.
pub const PROTECTED_PATHS: [&str; 4] = [DASHBOARD_PATH, USERS_PATH, POSTS_PATH, CORNERS_PATH];

/// Outcome of routing a requested path against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Serve the requested view (inside the shell for protected paths).
    Render,
    /// Send the client to the login view.
    RedirectToLogin,
    /// Unknown path while authenticated; fall back to the dashboard.
    RedirectToDashboard,
}

/// Map `(requested path, session)` to a routing outcome.
///
/// `/login` always renders, even for authenticated sessions, matching the
/// public-route-first declaration order of the route table.
pub fn decide_route(path: &str, session: &Session) -> RouteDecision {
    if path == LOGIN_PATH {
        return RouteDecision::Render;
    }
    if !session.is_authenticated() {
        return RouteDecision::RedirectToLogin;
    }
    if PROTECTED_PATHS.contains(&path) {
        RouteDecision::Render
    } else {
        RouteDecision::RedirectToDashboard
    }
}

/// Destination for a path the route table does not know.
pub fn fallback_redirect(session: &Session) -> &'static str {
    if session.is_authenticated() {
        DASHBOARD_PATH
    } else {
        LOGIN_PATH
    }
}

/// Redirect to `/login` whenever the session loses its token.
///
/// Installed once by the authenticated shell; re-runs on every session
/// change so a logout anywhere in the tree leaves the protected area.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
