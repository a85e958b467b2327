//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;
    Effect::new(move || {
        leptos::logging::warn!("404: no route for {}", pathname.get());
    });

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <a href="/" class="button button--primary">"Return to Home"</a>
        </div>
    }
}
