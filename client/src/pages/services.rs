//! Service catalog page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::SERVICES;
use crate::components::service_card::ServiceCard;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Title text="Services | DevStudio"/>
        <section class="section">
            <h1>"Services"</h1>
            <p>"Fixed-scope packages. Prices are starting points; every quote is confirmed before work begins."</p>
            <div class="card-grid">
                {SERVICES.iter().map(|s| view! { <ServiceCard service=s/> }).collect_view()}
            </div>
        </section>
    }
}
