//! Landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::catalog::{CASE_STUDIES, SERVICES};
use crate::components::service_card::ServiceCard;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="DevStudio | Websites and web apps"/>
        <section class="hero">
            <h1>"Websites and web applications that ship."</h1>
            <p class="hero__lead">
                "We design, build and look after fast sites for small businesses and startups."
            </p>
            <div class="hero__actions">
                <A href="/booking" attr:class="button">"Start a project"</A>
                <A href="/case-studies" attr:class="button button--secondary">"See our work"</A>
            </div>
        </section>
        <section class="section">
            <h2>"What we build"</h2>
            <div class="card-grid">
                {SERVICES.iter().take(3).map(|s| view! { <ServiceCard service=s compact=true/> }).collect_view()}
            </div>
            <A href="/services">"All services →"</A>
        </section>
        <section class="section">
            <h2>"Recent work"</h2>
            <ul class="case-list">
                {CASE_STUDIES
                    .iter()
                    .map(|c| {
                        view! {
                            <li>
                                <A href=format!("/case-studies/{}", c.slug)>{c.title}</A>
                                <span class="case-list__client">{c.client}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
