//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;

    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    Effect::new(move || {
        leptos::logging::warn!("404: no route for {}", pathname.get());
    });

    view! {
        <main class="not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <a href="/" class="btn btn--primary">"Return to Home"</a>
        </main>
    }
}
