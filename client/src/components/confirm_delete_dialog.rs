//! Confirmation modal shown before removing an image from the collection.

use leptos::prelude::*;

#[component]
pub fn ConfirmDeleteDialog(
    /// URL of the image pending removal, shown as a thumbnail.
    image_url: Signal<Option<String>>,
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                <button class="dialog__close" on:click=move |_| on_cancel.run(()) title="Close">
                    "×"
                </button>
                <h2>"Delete Image"</h2>
                {move || {
                    image_url
                        .get()
                        .map(|src| view! { <img class="dialog__thumb" src=src alt="Image pending removal"/> })
                }}
                <p class="dialog__danger">"Are you sure you want to delete this image?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "No"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        "Yes"
                    </button>
                </div>
            </div>
        </div>
    }
}
