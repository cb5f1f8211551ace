//! Authenticated shell wrapping every protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the parent route of all protected pages. Installs the
//! shared unauthenticated redirect and composes the sidebar chrome around
//! whichever nested view the router selected.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AuthenticatedLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| {
                view! {
                    <main class="main-content">
                        <p>"Redirecting to login..."</p>
                    </main>
                }
            }
        >
            <div class="authenticated-layout">
                <Sidebar/>
                <main class="main-content">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
