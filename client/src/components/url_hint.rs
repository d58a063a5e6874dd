//! Copyable prefix for building direct links to Drive-hosted images.

use leptos::prelude::*;

pub const DRIVE_VIEW_PREFIX: &str = "https://drive.google.com/uc?export=view&id=";

#[component]
pub fn UrlHint() -> impl IntoView {
    view! {
        <label class="url-hint">
            "Use this link to add image URL:"
            <textarea class="url-hint__text" rows="2" cols="45" readonly=true>
                {DRIVE_VIEW_PREFIX}
            </textarea>
        </label>
    }
}
