//! Landing route for the auth provider's redirect.
//!
//! The provider returns the access token in the URL fragment
//! (`#access_token=...`) and our `?next=` target in the query. Both only exist
//! in the browser, so the handoff runs inside `<Deferred>`.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::deferred::Deferred;
use crate::pages::login::next_path;
use crate::util::location::{QueryParams, SharedLocation, hash, use_search_params};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CallbackOutcome {
    Token { access_token: String, next: String },
    Failed(String),
}

pub(crate) fn callback_outcome(fragment: &str, query: &QueryParams) -> CallbackOutcome {
    let fragment = QueryParams::parse(fragment);
    if let Some(token) = fragment.get_non_empty("access_token") {
        return CallbackOutcome::Token { access_token: token.to_owned(), next: next_path(query) };
    }
    let reason = fragment
        .get_non_empty("error_description")
        .or_else(|| query.get_non_empty("error_description"))
        .unwrap_or("The sign-in link is missing its token.");
    CallbackOutcome::Failed(reason.to_owned())
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    view! {
        <Title text="Signing in | DevStudio"/>
        <div class="login-page">
            <div class="login-card">
                <Deferred placeholder="Signing you in…">
                    <SessionHandoff/>
                </Deferred>
            </div>
        </div>
    }
}

#[component]
fn SessionHandoff() -> impl IntoView {
    let location = expect_context::<SharedLocation>();
    let params = use_search_params();
    let outcome = Memo::new(move |_| params.with(|query| callback_outcome(&hash(location.as_ref()), query)));
    let message = RwSignal::new(String::new());

    Effect::new(move |_| match outcome.get() {
        CallbackOutcome::Token { access_token, next } => {
            message.set("Signing you in…".to_owned());
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::establish_session(&access_token).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().replace(&next);
                        }
                    }
                    Err(e) => {
                        log::warn!("session handoff failed: {e}");
                        message.set("We couldn't sign you in. Please try again.".to_owned());
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (access_token, next);
        }
        CallbackOutcome::Failed(reason) => message.set(reason),
    });

    view! {
        <p class="login-message">{move || message.get()}</p>
        <A href="/login">"Back to login"</A>
    }
}
