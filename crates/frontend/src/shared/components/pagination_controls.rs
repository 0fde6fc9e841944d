use crate::shared::icons::icon;
use contracts::shared::pagination::PageSlot;
use leptos::prelude::*;

/// Page buttons of a paged list: previous, the page window with gaps, next, and a page size
/// selector.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    #[prop(into)]
    total_count: Signal<usize>,

    /// Window computed by `page_window`
    #[prop(into)]
    window: Signal<Vec<PageSlot>>,

    on_page_change: Callback<usize>,

    /// Size selector is rendered only when both this and `page_size` are set
    #[prop(optional)]
    on_page_size_change: Option<Callback<usize>>,

    #[prop(optional, into)]
    page_size: Option<Signal<usize>>,

    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_default();

    let size_select = match (on_page_size_change, page_size) {
        (Some(on_change), Some(page_size)) if !page_size_opts.is_empty() => Some(view! {
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| view! {
                    <option value=size.to_string() selected=move || page_size.get() == size>
                        {size.to_string()}
                    </option>
                }).collect_view()}
            </select>
        }),
        _ => None,
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || window.get().into_iter().map(|slot| match slot {
                PageSlot::Page(page) => view! {
                    <button
                        class="pagination-btn pagination-btn--page"
                        class:active=move || current_page.get() == page
                        on:click=move |_| on_page_change.run(page)
                    >
                        {page + 1}
                    </button>
                }.into_any(),
                PageSlot::Gap => view! { <span class="pagination-gap">"…"</span> }.into_any(),
            }).collect_view()}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || format!("{} item(s)", total_count.get())}
            </span>
            {size_select}
        </div>
    }
}
