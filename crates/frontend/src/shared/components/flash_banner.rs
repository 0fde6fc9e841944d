use leptos::prelude::*;

use crate::shared::flash::{Flash, FlashKind};

#[component]
pub fn FlashBanner(flash: Flash) -> impl IntoView {
    move || {
        flash.message().map(|m| {
            let class = match m.kind {
                FlashKind::Success => "flash flash--success",
                FlashKind::Error => "flash flash--error",
            };
            view! {
                <div class=class role="status" on:click=move |_| flash.clear()>
                    {m.text}
                </div>
            }
        })
    }
}
