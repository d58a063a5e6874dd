//! Modal for adding an image to the collection by URL.

use leptos::prelude::*;

/// The draft URL is owned by the page state; this dialog only reports edits.
#[component]
pub fn AddImageDialog(
    draft_url: Signal<String>,
    busy: Signal<bool>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            on_submit.run(());
        }
        "Escape" => {
            ev.prevent_default();
            on_cancel.run(());
        }
        _ => {}
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <button class="dialog__close" on:click=move |_| on_cancel.run(()) title="Close">
                    "×"
                </button>
                <h2>"Add Image"</h2>
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Image URL"
                    prop:value=move || draft_url.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| on_submit.run(())
                    >
                        {move || if busy.get() { "Adding..." } else { "Add" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
