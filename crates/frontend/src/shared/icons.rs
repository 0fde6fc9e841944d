use leptos::prelude::*;

fn frame(inner: AnyView) -> AnyView {
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {inner}
        </svg>
    }
    .into_any()
}

/// Inline SVG icon by name; unknown names render an empty circle
pub fn icon(name: &str) -> AnyView {
    let inner = match name {
        "items" => view! {
            <rect x="3" y="3" width="7" height="7" rx="1"/>
            <rect x="14" y="3" width="7" height="7" rx="1"/>
            <rect x="14" y="14" width="7" height="7" rx="1"/>
            <rect x="3" y="14" width="7" height="7" rx="1"/>
        }.into_any(),
        "box" => view! {
            <path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/>
            <path d="M3.27 6.96 12 12l8.73-5.04"/>
            <path d="M12 22V12"/>
        }.into_any(),
        "archive" => view! {
            <rect x="2" y="3" width="20" height="5" rx="1"/>
            <path d="M4 8v11a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8"/>
            <path d="M10 12h4"/>
        }.into_any(),
        "tag" => view! {
            <path d="M20.59 13.41 13.42 20.58a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z"/>
            <circle cx="7" cy="7" r="1.5"/>
        }.into_any(),
        "status" => view! {
            <circle cx="12" cy="12" r="9"/>
            <path d="M8 12l3 3 5-6"/>
        }.into_any(),
        "ruler" => view! {
            <path d="M3 17 17 3l4 4L7 21z"/>
            <path d="M7 13l2 2"/>
            <path d="M10 10l2 2"/>
            <path d="M13 7l2 2"/>
        }.into_any(),
        "qr" => view! {
            <rect x="3" y="3" width="7" height="7"/>
            <rect x="14" y="3" width="7" height="7"/>
            <rect x="3" y="14" width="7" height="7"/>
            <path d="M14 14h3v3h-3zM20 14v7M14 20h3"/>
        }.into_any(),
        "plus" => view! {
            <path d="M12 5v14"/>
            <path d="M5 12h14"/>
        }.into_any(),
        "refresh" => view! {
            <path d="M21 12a9 9 0 1 1-2.64-6.36"/>
            <path d="M21 3v6h-6"/>
        }.into_any(),
        "edit" => view! {
            <path d="M12 20h9"/>
            <path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>
        }.into_any(),
        "delete" => view! {
            <path d="M3 6h18"/>
            <path d="M8 6V4h8v2"/>
            <path d="M19 6l-1 14H6L5 6"/>
        }.into_any(),
        "download" => view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <path d="M7 10l5 5 5-5"/>
            <path d="M12 15V3"/>
        }.into_any(),
        "search" => view! {
            <circle cx="11" cy="11" r="7"/>
            <path d="M21 21l-4.35-4.35"/>
        }.into_any(),
        "arrow-left" => view! {
            <path d="M19 12H5"/>
            <path d="M12 19l-7-7 7-7"/>
        }.into_any(),
        "chevron-left" => view! { <path d="M15 18l-6-6 6-6"/> }.into_any(),
        "chevron-right" => view! { <path d="M9 18l6-6-6-6"/> }.into_any(),
        "x" => view! {
            <path d="M18 6 6 18"/>
            <path d="M6 6l12 12"/>
        }.into_any(),
        "logout" => view! {
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
            <path d="M16 17l5-5-5-5"/>
            <path d="M21 12H9"/>
        }.into_any(),
        _ => view! { <circle cx="12" cy="12" r="4"/> }.into_any(),
    };
    frame(inner)
}
