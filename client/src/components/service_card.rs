//! Card for a catalog entry, used by the home and services pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::format_usd;
use crate::net::types::ServiceItem;

#[component]
pub fn ServiceCard(service: &'static ServiceItem, #[prop(optional)] compact: bool) -> impl IntoView {
    let book_href = format!("/booking?service={}", service.slug);
    view! {
        <article class="service-card" class:service-card--compact=compact>
            <h3 class="service-card__title">{service.title}</h3>
            <p class="service-card__summary">{service.summary}</p>
            <p class="service-card__price">"From " {format_usd(service.price_usd)}</p>
            <Show when=move || !compact>
                <ul class="service-card__features">
                    {service.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                </ul>
            </Show>
            <A href=book_href attr:class="button">"Book this"</A>
        </article>
    }
}
