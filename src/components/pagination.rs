//! Prev/next pagination controls shared by the record-list views.

use leptos::prelude::*;

use crate::util::pagination::{has_next, has_prev, next_page, prev_page};

/// Prev/next buttons plus a "Showing X to Y of Z" range label. Mutating
/// `page` is what triggers the owning view's refetch effect.
#[component]
pub fn PaginationControls(
    page: RwSignal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] range_text: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <span class="pagination__range">{move || range_text.get()}</span>
            <div class="pagination__buttons">
                <button
                    class="btn btn--page"
                    disabled=move || !has_prev(page.get())
                    on:click=move |_| page.set(prev_page(page.get()))
                >
                    "Prev"
                </button>
                <button
                    class="btn btn--page"
                    disabled=move || !has_next(page.get(), total_pages.get())
                    on:click=move |_| page.set(next_page(page.get(), total_pages.get()))
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
