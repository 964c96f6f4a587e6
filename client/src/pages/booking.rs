//! Booking page: pick a catalog service and start checkout.
//!
//! The preselected service comes from `?service=<slug>`, so the form reads
//! the query string and is rendered inside `<Deferred>`.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::{SERVICES, find_service, format_usd};
use crate::components::deferred::Deferred;
use crate::net::types::{CheckoutOrder, ServiceItem};
use crate::util::location::{QueryParams, use_search_params};

/// Service named by `?service=`, if it exists in the catalog.
pub(crate) fn selected_service(params: &QueryParams) -> Option<&'static ServiceItem> {
    params.get_non_empty("service").and_then(find_service)
}

/// Slug the form starts on: the requested service, else the first one.
pub(crate) fn preselected(params: &QueryParams) -> &'static str {
    selected_service(params).or_else(|| SERVICES.first()).map_or("", |s| s.slug)
}

/// Where to send the browser once the gateway order exists.
pub(crate) fn checkout_success_href(order: &CheckoutOrder) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("order_id", &order.order_id)
        .append_pair("service", &order.service)
        .finish();
    format!("/checkout/success?{query}")
}

#[component]
pub fn BookingPage() -> impl IntoView {
    view! {
        <Title text="Book a project | DevStudio"/>
        <section class="section">
            <h1>"Book a project"</h1>
            <Deferred placeholder="Loading booking details…">
                <BookingForm/>
            </Deferred>
        </section>
    }
}

#[component]
fn BookingForm() -> impl IntoView {
    let params = use_search_params();
    let selected = RwSignal::new(params.with_untracked(preselected).to_owned());
    Effect::new(move |_| selected.set(params.with(preselected).to_owned()));
    let status = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        status.set("Creating your order…".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let slug = selected.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_order(&slug).await {
                    Ok(order) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&checkout_success_href(&order));
                        }
                    }
                    Err(e) => {
                        log::warn!("checkout order failed: {e}");
                        status.set("We couldn't start checkout. Please try again.".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <form class="booking-form" on:submit=on_submit>
            <label class="booking-form__label" for="service">"Service"</label>
            <select
                id="service"
                class="booking-form__select"
                prop:value=move || selected.get()
                on:change=move |ev| selected.set(event_target_value(&ev))
            >
                {SERVICES
                    .iter()
                    .map(|s| view! { <option value=s.slug selected=move || selected.with(|sel| sel == s.slug)>{s.title}</option> })
                    .collect_view()}
            </select>
            {move || {
                find_service(&selected.get())
                    .map(|s| {
                        view! {
                            <div class="booking-form__summary">
                                <p>{s.summary}</p>
                                <p class="booking-form__price">"From " {format_usd(s.price_usd)}</p>
                            </div>
                        }
                    })
            }}
            <button class="button" type="submit" disabled=move || busy.get()>
                "Continue to payment"
            </button>
            <Show when=move || !status.get().is_empty()>
                <p class="booking-form__status">{move || status.get()}</p>
            </Show>
        </form>
    }
}
