//! One image tile in the collection grid with its delete affordance.

use leptos::prelude::*;

use crate::net::types::Image;

#[component]
pub fn ImageCard(image: Image, on_delete: Callback<Image>) -> impl IntoView {
    let alt = image.alt_text();
    let src = image.image_url.clone();

    view! {
        <div class="image-card">
            <img class="image-card__img" src=src alt=alt loading="lazy"/>
            <button
                class="image-card__delete"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    on_delete.run(image.clone());
                }
                title="Remove image"
                aria-label="Remove image"
            >
                "×"
            </button>
        </div>
    }
}
