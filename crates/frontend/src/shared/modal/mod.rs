use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Buttons rendered in the footer (Confirm, Save, Cancel...)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    /// Extra class for sizing, e.g. `modal--narrow`
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    // Escape closes; the listener lives as long as the modal does
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=format!("modal {class}") on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|f| view! { <div class="modal-footer">{f()}</div> })}
            </div>
        </div>
    }
}
