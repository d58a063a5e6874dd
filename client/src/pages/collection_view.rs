//! Collection admin page: list, add, and remove images of one collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route: `/admin/collection/:collectionId`. The page owns a
//! `CollectionViewState` signal, feeds it actions from the UI and from
//! finished requests, and runs the commands the reducer returns on the
//! browser task queue.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::add_image_dialog::AddImageDialog;
use crate::components::admin_layout::AdminLayout;
use crate::components::confirm_delete_dialog::ConfirmDeleteDialog;
use crate::components::masonry_grid::MasonryGrid;
use crate::components::url_hint::UrlHint;
use crate::net::api::AdminApi;
use crate::net::types::{CollectionId, Image};
use crate::state::collection::{Action, CollectionViewState};
use crate::util::notify;

/// Route parameter carrying the collection identifier.
pub const COLLECTION_PARAM: &str = "collectionId";

/// Apply `action` and, in the browser, run the resulting command.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn dispatch(state: RwSignal<CollectionViewState>, api: StoredValue<AdminApi>, action: Action) {
    let mut command = None;
    state.update(|s| command = s.apply(action));
    let Some(command) = command else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let client = api.get_value();
        let next = crate::state::collection::execute(&client, command).await;
        dispatch(state, api, next);
    });
    #[cfg(not(feature = "hydrate"))]
    leptos::logging::log!("skipping {command:?} outside the browser");
}

#[component]
pub fn CollectionViewPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<AdminApi>());
    let state = RwSignal::new(CollectionViewState::default());
    let params = use_params_map();

    let collection_id = Memo::new(move |_| params.with(|p| p.get(COLLECTION_PARAM)).and_then(|raw| CollectionId::new(&raw)));

    Effect::new(move || {
        if let Some(id) = collection_id.get() {
            dispatch(state, api, Action::Open(id));
        }
    });

    // Surface acknowledgments once, then clear them.
    Effect::new(move || {
        let Some(notice) = state.with(|s| s.notice.clone()) else {
            return;
        };
        notify::acknowledge(notice.message());
        dispatch(state, api, Action::DismissNotice);
    });

    let images = Signal::derive(move || state.with(|s| s.images.clone()));
    let busy = Signal::derive(move || state.with(CollectionViewState::is_busy));
    let draft_url = Signal::derive(move || state.with(|s| s.draft_url().to_owned()));
    let selected_url = Signal::derive(move || state.with(|s| s.selected_image().map(|i| i.image_url.clone())));

    let on_delete = Callback::new(move |image: Image| dispatch(state, api, Action::SelectForDelete(image)));
    let on_input = Callback::new(move |text: String| dispatch(state, api, Action::EditDraft(text)));
    let on_submit = Callback::new(move |()| dispatch(state, api, Action::SubmitAdd));
    let on_confirm = Callback::new(move |()| dispatch(state, api, Action::ConfirmDelete));
    let on_cancel = Callback::new(move |()| dispatch(state, api, Action::CloseModal));

    view! {
        <AdminLayout>
            <div class="admin-collection-view">
                <h2>"Collection Images"</h2>
                <div class="admin-collection-view__actions">
                    <button class="btn btn--primary" on:click=move |_| dispatch(state, api, Action::OpenAdd)>
                        "Add Image"
                    </button>
                    <UrlHint/>
                </div>
                <Show
                    when=move || collection_id.get().is_some()
                    fallback=|| view! { <p class="admin-collection-view__empty">"No collection selected."</p> }
                >
                    <MasonryGrid images=images on_delete=on_delete/>
                </Show>
                <Show when=move || state.with(CollectionViewState::is_add_open)>
                    <AddImageDialog
                        draft_url=draft_url
                        busy=busy
                        on_input=on_input
                        on_submit=on_submit
                        on_cancel=on_cancel
                    />
                </Show>
                <Show when=move || state.with(CollectionViewState::is_delete_open)>
                    <ConfirmDeleteDialog
                        image_url=selected_url
                        busy=busy
                        on_confirm=on_confirm
                        on_cancel=on_cancel
                    />
                </Show>
            </div>
        </AdminLayout>
    }
}
