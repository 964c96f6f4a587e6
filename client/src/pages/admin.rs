//! Admin dashboard. Reachable only after the server's admin gate.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::boundary::RenderError;
use crate::components::failure::FailureBoundary;
use crate::net::api;
use crate::net::types::AdminOverview;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <Title text="Admin | DevStudio"/>
        <section class="section">
            <h1>"Admin"</h1>
            <FailureBoundary label="admin-overview">
                <OverviewPanel/>
            </FailureBoundary>
        </section>
    }
}

#[component]
fn OverviewPanel() -> impl IntoView {
    let overview = LocalResource::new(api::fetch_admin_overview);
    view! {
        <Suspense fallback=|| view! { <p class="deferred-placeholder">"Loading overview…"</p> }>
            {move || Suspend::new(async move {
                let data = overview.await.map_err(RenderError::Data)?;
                Ok::<_, RenderError>(view! { <OverviewCards overview=data/> })
            })}
        </Suspense>
    }
}

#[component]
fn OverviewCards(overview: AdminOverview) -> impl IntoView {
    view! {
        <p class="admin__identity">
            {format!(
                "{} ({})",
                overview.admin.email.unwrap_or_else(|| overview.admin.user_id.clone()),
                overview.admin.role,
            )}
        </p>
        <div class="card-grid">
            <article class="stat-card">
                <span class="stat-card__value">{overview.active_offers}</span>
                <span class="stat-card__label">"Active offers"</span>
            </article>
            <article class="stat-card">
                <span class="stat-card__value">{overview.services}</span>
                <span class="stat-card__label">"Catalog services"</span>
            </article>
            <article class="stat-card">
                <span class="stat-card__value">{overview.case_studies}</span>
                <span class="stat-card__label">"Case studies"</span>
            </article>
        </div>
    }
}
