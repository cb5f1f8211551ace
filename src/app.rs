//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::layout::AuthenticatedLayout;
use crate::pages::{
    corners::CornersPage, dashboard::DashboardPage, login::LoginPage, posts::PostsPage,
    users::UsersPage,
};
use crate::state::session::{Session, restore_session};
use crate::util::auth::fallback_redirect;

/// Root application component.
///
/// Restores the persisted session once at startup, provides it via
/// context, and sets up client-side routing: the login route is public,
/// every other known route nests under the authenticated shell, and
/// unknown paths resolve through [`RouteFallback`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(restore_session());
    provide_context(session);

    view! {
        <Title text="Streetz Talk Admin"/>

        <Router>
            <Routes fallback=RouteFallback>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=AuthenticatedLayout>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("posts") view=PostsPage/>
                    <Route path=StaticSegment("corners") view=CornersPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Unknown paths resolve by redirect, never an error view: dashboard when
/// authenticated, login when not.
#[component]
fn RouteFallback() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    view! { <Redirect path=fallback_redirect(&session.get_untracked())/> }
}
