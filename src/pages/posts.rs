//! Posts page: paginated post list with author enrichment.
//!
//! Authors arrive as record IDs; after each page fetch the unique IDs are
//! resolved into user records one by one so names render instead of IDs.
//! Already-resolved authors are kept across pages.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;

use crate::components::pagination::PaginationControls;
use crate::net::types::{PostRecord, RecordPage, UserRecord};
use crate::state::session::Session;
use crate::util::format::{format_created, truncate};
use crate::util::pagination::showing_text;

/// Posts shown per page.
const PER_PAGE: u32 = 30;

/// Characters of post content shown in the table.
const CONTENT_PREVIEW_CHARS: usize = 80;

/// Case-insensitive match against content or address. An empty term
/// matches everything.
fn post_matches(post: &PostRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    post.content.to_lowercase().contains(&term) || post.address.to_lowercase().contains(&term)
}

/// Author IDs of `posts`, deduplicated, in first-seen order. Empty IDs
/// are skipped.
fn unique_author_ids(posts: &[PostRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for post in posts {
        if !post.author.is_empty() && seen.insert(post.author.clone()) {
            ids.push(post.author.clone());
        }
    }
    ids
}

/// Display name for an author ID, falling back to the raw ID until its
/// record resolves.
fn author_name(authors: &HashMap<String, UserRecord>, id: &str) -> String {
    authors.get(id).map_or_else(|| id.to_owned(), |user| user.name.clone())
}

#[component]
pub fn PostsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let page = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let data = RwSignal::new(RecordPage::<PostRecord>::default());
    let authors = RwSignal::new(HashMap::<String, UserRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let current = page.get();
        let token = session.with_untracked(|s| s.token().unwrap_or_default().to_owned());
        loading.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_records::<PostRecord>(&token, "posts", current, PER_PAGE)
                .await
            {
                Ok(page_data) => {
                    let ids = unique_author_ids(&page_data.items);
                    data.set(page_data);
                    error.set(None);
                    loading.set(false);

                    // Resolve authors after the list renders; each failure
                    // leaves that one ID unresolved.
                    for id in ids {
                        if authors.with_untracked(|a| a.contains_key(&id)) {
                            continue;
                        }
                        match crate::net::api::fetch_record::<UserRecord>(&token, "users", &id)
                            .await
                        {
                            Ok(user) => {
                                authors.update(|a| {
                                    a.insert(id, user);
                                });
                            }
                            Err(e) => log::warn!("author fetch failed for {id}: {e}"),
                        }
                    }
                }
                Err(e) => {
                    log::error!("posts fetch failed: {e}");
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (current, token);
        }
    });

    view! {
        <div class="page posts-page">
            <header class="page__header">
                <div>
                    <h1>"Posts"</h1>
                    <p class="page__subtitle">"Manage and monitor user posts"</p>
                </div>
            </header>

            <div class="search-bar">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search posts..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-loading">"Loading posts..."</p> }
            >
                <div class="card table-card">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Post"</th>
                                <th>"Author"</th>
                                <th>"Location"</th>
                                <th>"Engagement"</th>
                                <th>"Posted"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let term = search.get().trim().to_lowercase();
                                data.get()
                                    .items
                                    .into_iter()
                                    .filter(|post| post_matches(post, &term))
                                    .map(|post| {
                                        let preview = truncate(&post.content, CONTENT_PREVIEW_CHARS);
                                        let author =
                                            authors.with(|a| author_name(a, &post.author));
                                        let posted = format_created(&post.created);
                                        let has_image = !post.image.is_empty();
                                        let likes = post.likes.len();
                                        let comments = post.comments.len();
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="table__post">
                                                        <span class="table__name">{preview}</span>
                                                        {has_image
                                                            .then(|| {
                                                                view! {
                                                                    <span class="table__subtle">"has image"</span>
                                                                }
                                                            })}
                                                    </div>
                                                </td>
                                                <td>{author}</td>
                                                <td>{post.address}</td>
                                                <td>
                                                    <span class="table__stat">{likes} " likes"</span>
                                                    <span class="table__stat">{comments} " comments"</span>
                                                </td>
                                                <td>{posted}</td>
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
                            showing_text(page.get(), PER_PAGE, data.get().total_items, "posts")
                        })
                    />
                </div>
            </Show>
        </div>
    }
}
