//! Chrome shared by admin pages: header bar plus content area.

use leptos::prelude::*;

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    view! {
        <div class="admin-layout">
            <header class="admin-layout__header toolbar">
                <span class="toolbar__title">"Admin Dashboard"</span>
            </header>
            <main class="admin-layout__content">{children()}</main>
        </div>
    }
}
