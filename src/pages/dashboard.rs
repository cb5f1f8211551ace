//! Dashboard page: headline stats and the most recent users.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches one page of users
//! per pagination action; a stale in-flight response overwriting a newer
//! one is an accepted race for this class of UI.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::pagination::PaginationControls;
use crate::components::stat_card::{Stat, StatCard, Trend};
use crate::net::types::{RecordPage, UserRecord};
use crate::state::session::Session;
use crate::util::format::format_created;
use crate::util::pagination::showing_text;

/// Users shown per dashboard page.
const PER_PAGE: u32 = 7;

/// Headline stats derived from the user count. Post and corner totals are
/// estimated ratios until the backend exposes real aggregates.
fn derive_stats(total_users: u32) -> [Stat; 3] {
    [
        Stat {
            title: "Total Users",
            value: total_users.to_string(),
            change: "+40%",
            trend: Trend::Up,
        },
        Stat {
            title: "Total Post Created",
            value: (total_users * 4 / 5).to_string(),
            change: "+20%",
            trend: Trend::Up,
        },
        Stat {
            title: "Total Corners Created",
            value: (total_users / 10).to_string(),
            change: "+10%",
            trend: Trend::Up,
        },
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let page = RwSignal::new(1u32);
    let data = RwSignal::new(RecordPage::<UserRecord>::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // Refetch whenever the page changes. Single attempt, no retry.
    Effect::new(move || {
        let current = page.get();
        let token = session.with_untracked(|s| s.token().unwrap_or_default().to_owned());
        loading.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_records::<UserRecord>(&token, "users", current, PER_PAGE)
                .await
            {
                Ok(page_data) => {
                    data.set(page_data);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("users fetch failed: {e}");
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (current, token);
        }
    });

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <div>
                    <h1>"Welcome back, Admin"</h1>
                    <p class="page__subtitle">"Track, manage and forecast your users."</p>
                </div>
            </header>

            <div class="stats-grid">
                {move || {
                    derive_stats(data.get().total_items)
                        .into_iter()
                        .map(|stat| view! { <StatCard stat=stat/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-loading">"Loading users..."</p> }
            >
                <div class="card table-card">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"User"</th>
                                <th>"Email"</th>
                                <th>"Joined"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                data.get()
                                    .items
                                    .into_iter()
                                    .map(|user| {
                                        let joined = format_created(&user.created);
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="table__user">
                                                        <span class="table__name">{user.name}</span>
                                                        <span class="table__subtle">"@" {user.username}</span>
                                                    </div>
                                                </td>
                                                <td>{user.email}</td>
                                                <td>{joined}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                    <PaginationControls
                        page=page
                        total_pages=Signal::derive(move || data.get().total_pages)
                        range_text=Signal::derive(move || {
                            showing_text(page.get(), PER_PAGE, data.get().total_items, "users")
                        })
                    />
                </div>
            </Show>
        </div>
    }
}
