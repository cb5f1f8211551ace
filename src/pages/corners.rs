//! Corners page: paginated corner list with client-side search filtering.

#[cfg(test)]
#[path = "corners_test.rs"]
mod corners_test;

use leptos::prelude::*;

use crate::components::pagination::PaginationControls;
use crate::net::types::{CornerRecord, RecordPage};
use crate::state::session::Session;
use crate::util::format::format_created;
use crate::util::pagination::showing_text;

/// Corners shown per page.
const PER_PAGE: u32 = 10;

/// Case-insensitive match against name or description. An empty term
/// matches everything.
fn corner_matches(corner: &CornerRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    corner.name.to_lowercase().contains(&term)
        || corner.description.to_lowercase().contains(&term)
}

#[component]
pub fn CornersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let page = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let data = RwSignal::new(RecordPage::<CornerRecord>::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let current = page.get();
        let token = session.with_untracked(|s| s.token().unwrap_or_default().to_owned());
        loading.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_records::<CornerRecord>(
                &token, "corners", current, PER_PAGE,
            )
            .await
            {
                Ok(page_data) => {
                    data.set(page_data);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("corners fetch failed: {e}");
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
        <div class="page corners-page">
            <header class="page__header">
                <div>
                    <h1>"Corners"</h1>
                    <p class="page__subtitle">"Track and manage street corners"</p>
                </div>
            </header>

            <div class="search-bar">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search corners..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-loading">"Loading corners..."</p> }
            >
                <div class="card table-card">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Corner"</th>
                                <th>"Description"</th>
                                <th>"Members"</th>
                                <th>"Created"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let term = search.get().trim().to_lowercase();
                                data.get()
                                    .items
                                    .into_iter()
                                    .filter(|corner| corner_matches(corner, &term))
                                    .map(|corner| {
                                        let created = format_created(&corner.created);
                                        let members = corner.members.len();
                                        view! {
                                            <tr>
                                                <td>
                                                    <span class="table__name">{corner.name}</span>
                                                </td>
                                                <td>{corner.description}</td>
                                                <td>{members}</td>
                                                <td>{created}</td>
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
                            showing_text(page.get(), PER_PAGE, data.get().total_items, "corners")
                        })
                    />
                </div>
            </Show>
        </div>
    }
}
