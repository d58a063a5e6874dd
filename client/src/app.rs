//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::AdminApi;
use crate::pages::collection_view::{COLLECTION_PARAM, CollectionViewPage};
use crate::util::token::read_admin_token;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the authenticated API client once and shares it via context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = AdminApi::new(&ApiConfig::from_build_env(), read_admin_token());
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio-admin.css"/>
        <Title text="Portfolio Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("collection"), ParamSegment(COLLECTION_PARAM))
                    view=CollectionViewPage
                />
            </Routes>
        </Router>
    }
}
