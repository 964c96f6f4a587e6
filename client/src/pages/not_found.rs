//! Fallback route.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page not found | DevStudio"/>
        <section class="section not-found">
            <h1>"Page not found"</h1>
            <p>"The page you're looking for doesn't exist or has moved."</p>
            <A href="/" attr:class="button">"Back to home"</A>
        </section>
    }
}
