//! Case study list and detail pages.

#[cfg(test)]
#[path = "case_studies_test.rs"]
mod case_studies_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::boundary::RenderError;
use crate::catalog::{CASE_STUDIES, find_case_study};
use crate::components::failure::FailureBoundary;
use crate::net::types::CaseStudy;

/// Resolve the `:slug` route parameter to a case study.
pub(crate) fn load_case_study(slug: Option<&str>) -> Result<&'static CaseStudy, RenderError> {
    let slug = slug
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| RenderError::Invalid("missing case study slug".to_owned()))?;
    find_case_study(slug).ok_or_else(|| RenderError::Data(format!("unknown case study '{slug}'")))
}

#[component]
pub fn CaseStudiesPage() -> impl IntoView {
    view! {
        <Title text="Case studies | DevStudio"/>
        <section class="section">
            <h1>"Case studies"</h1>
            <div class="card-grid">
                {CASE_STUDIES
                    .iter()
                    .map(|c| {
                        view! {
                            <article class="case-card">
                                <h3>{c.title}</h3>
                                <p class="case-card__client">{c.client}</p>
                                <p>{c.summary}</p>
                                <A href=format!("/case-studies/{}", c.slug)>"Read more →"</A>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn CaseStudyPage() -> impl IntoView {
    let params = use_params_map();

    let study = move || -> Result<_, RenderError> {
        let slug = params.read().get("slug");
        let study = load_case_study(slug.as_deref())?;
        Ok(view! {
            <Title text=format!("{} | DevStudio", study.title)/>
            <article class="case-study">
                <h1>{study.title}</h1>
                <p class="case-study__client">{study.client}</p>
                <p>{study.summary}</p>
                <h2>"Outcome"</h2>
                <p>{study.outcome}</p>
                <h2>"Stack"</h2>
                <ul class="tag-list">
                    {study.stack.iter().map(|t| view! { <li class="tag">{*t}</li> }).collect_view()}
                </ul>
                <A href="/booking" attr:class="button">"Start a similar project"</A>
            </article>
        })
    };

    view! {
        <section class="section">
            <FailureBoundary label="case-study">{study}</FailureBoundary>
        </section>
    }
}
