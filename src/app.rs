use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::LoaderSettings;
use crate::core::config::LOADER_META_NAME;
use crate::ui::{LandingPage, NotFoundPage, WaitroomLoader};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provided by the server router; the browser reads it back from the meta tag
    let loader = use_context::<LoaderSettings>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=LOADER_META_NAME content=loader.duration_ms().to_string()/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Flipped to false once by the loader, never back
    let is_loading = RwSignal::new(true);

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/waitroom.css"/>

        <Title text="Waitroom"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=move || view! { <HomePage is_loading=is_loading/> }/>
            </Routes>
        </Router>
    }
}

/// Loader first, then the landing page
#[component]
fn HomePage(is_loading: RwSignal<bool>) -> impl IntoView {
    let settings = use_context::<LoaderSettings>().unwrap_or_else(LoaderSettings::from_page);
    let on_complete = Callback::new(move |()| is_loading.set(false));

    view! {
        <Show when=move || is_loading.get() fallback=|| view! { <LandingPage/> }>
            <WaitroomLoader on_complete=on_complete duration=settings.duration/>
        </Show>
    }
}
