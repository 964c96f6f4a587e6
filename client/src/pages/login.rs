//! Login page. Authentication itself happens on the auth provider's hosted
//! page; this screen only forwards the `?next=` target through `/auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::deferred::Deferred;
use crate::util::location::{QueryParams, use_search_params};

/// Post-login destination from `?next=`. Only same-site absolute paths are
/// accepted; anything else falls back to `/dashboard`.
pub fn next_path(params: &QueryParams) -> String {
    match params.get_non_empty("next") {
        Some(next) if is_local_path(next) => next.to_owned(),
        _ => "/dashboard".to_owned(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') && !path.contains("://")
}

/// Server route that redirects to the provider's hosted login.
pub(crate) fn provider_login_href(next: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("next", next)
        .finish();
    format!("/auth/login?{query}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Log in | DevStudio"/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <p class="login-card__subtitle">"Sign in to track your projects and invoices."</p>
                <Deferred placeholder="Preparing sign-in…">
                    <LoginActions/>
                </Deferred>
            </div>
        </div>
    }
}

#[component]
fn LoginActions() -> impl IntoView {
    let params = use_search_params();
    let href = move || provider_login_href(&params.with(next_path));
    view! {
        <a class="button login-button" href=href rel="external">
            "Continue with your account"
        </a>
    }
}
