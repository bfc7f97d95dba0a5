//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Tell the server to answer with a real 404 status
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found - Waitroom" />
        <div class="not-found">
            <div class="not-found-inner">
                <h1 class="not-found-code">"404"</h1>
                <h2 class="not-found-title">"Nobody is waiting here"</h2>
                <p class="not-found-text">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <A href="/" attr:class="btn btn-primary">
                    <Icon name=icons::HOME class="w-5 h-5" />
                    "Back to Waitroom"
                </A>
            </div>
        </div>
    }
}
