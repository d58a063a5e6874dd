//! Responsive masonry layout for collection images.
//!
//! DESIGN
//! ======
//! Column assignment lives in `util::masonry`; this component only tracks
//! the viewport width and renders the stacks it is handed.
//!
//! The first render on both sides uses `FALLBACK_VIEWPORT_WIDTH` so the
//! hydrated DOM matches the server HTML. The real width arrives from an
//! effect, which only runs in the browser after hydration.

use leptos::prelude::*;

use crate::components::image_card::ImageCard;
use crate::net::types::Image;
use crate::util::masonry::{COLLECTION_BREAKPOINTS, FALLBACK_VIEWPORT_WIDTH, distribute};
#[cfg(feature = "hydrate")]
use crate::util::masonry::viewport_width;

#[component]
pub fn MasonryGrid(images: Signal<Vec<Image>>, on_delete: Callback<Image>) -> impl IntoView {
    let width = RwSignal::new(FALLBACK_VIEWPORT_WIDTH);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || width.set(viewport_width()));
        let handle = window_event_listener(leptos::ev::resize, move |_| width.set(viewport_width()));
        on_cleanup(move || handle.remove());
    }

    let columns = Memo::new(move |_| COLLECTION_BREAKPOINTS.columns_for(width.get()));
    let stacks = move || images.with(|list| distribute(list, columns.get()));

    view! {
        <div class="masonry-grid">
            {move || {
                stacks()
                    .into_iter()
                    .map(|stack| {
                        view! {
                            <div class="masonry-grid__column">
                                {stack
                                    .into_iter()
                                    .map(|image| view! { <ImageCard image=image on_delete=on_delete/> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
