//! Users page: paginated account list with client-side search filtering.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::pagination::PaginationControls;
use crate::net::api::avatar_url;
use crate::net::types::{RecordPage, UserRecord};
use crate::state::session::Session;
use crate::util::format::format_created;
use crate::util::pagination::showing_text;

/// Users shown per page.
const PER_PAGE: u32 = 10;

/// Case-insensitive match against name, username, or email. An empty term
/// matches everything. The filter only narrows the already-fetched page.
fn user_matches(user: &UserRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    user.name.to_lowercase().contains(&term)
        || user.username.to_lowercase().contains(&term)
        || user.email.to_lowercase().contains(&term)
}

/// "City, Country" when a primary location is set, otherwise empty.
fn location_text(user: &UserRecord) -> String {
    user.pri_location
        .as_ref()
        .map_or_else(String::new, |loc| format!("{}, {}", loc.city, loc.country))
}

/// Badge class and label for the verification column.
fn status_badge(verified: bool) -> (&'static str, &'static str) {
    if verified {
        ("badge badge--ok", "Verified")
    } else {
        ("badge", "Unverified")
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let page = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let data = RwSignal::new(RecordPage::<UserRecord>::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

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
        <div class="page users-page">
            <header class="page__header">
                <div>
                    <h1>"Users"</h1>
                    <p class="page__subtitle">"Manage and monitor user accounts"</p>
                </div>
            </header>

            <div class="search-bar">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search users..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
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
                                <th>"Location"</th>
                                <th>"Stats"</th>
                                <th>"Joined"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let term = search.get().trim().to_lowercase();
                                data.get()
                                    .items
                                    .into_iter()
                                    .filter(|user| user_matches(user, &term))
                                    .map(|user| {
                                        let avatar_view = (!user.avatar.is_empty())
                                            .then(|| avatar_url(&user.id, &user.avatar))
                                            .map(|src| {
                                                view! { <img class="avatar" src=src alt=user.name.clone()/> }
                                            });
                                        let location = location_text(&user);
                                        let joined = format_created(&user.created);
                                        let (badge_class, badge_label) = status_badge(user.verified);
                                        let followers = user.followers.len();
                                        let posts = user.posts.len();
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="table__user">
                                                        {avatar_view}
                                                        <div>
                                                            <span class="table__name">{user.name}</span>
                                                            <span class="table__subtle">"@" {user.username}</span>
                                                        </div>
                                                    </div>
                                                </td>
                                                <td>{location}</td>
                                                <td>
                                                    <span class="table__stat">{followers} " followers"</span>
                                                    <span class="table__stat">{posts} " posts"</span>
                                                </td>
                                                <td>{joined}</td>
                                                <td>
                                                    <span class=badge_class>{badge_label}</span>
                                                </td>
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
