//! Post-checkout confirmation page.
//!
//! Reads `?order_id=`, `?payment_id=` and `?service=` from the URL, so it is
//! rendered inside `<Deferred>`. A visit without any reference id is treated
//! as a render failure rather than a blank receipt.

#[cfg(test)]
#[path = "checkout_success_test.rs"]
mod checkout_success_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::boundary::RenderError;
use crate::catalog::find_service;
use crate::components::deferred::Deferred;
use crate::components::failure::FailureBoundary;
use crate::net::types::ServiceItem;
use crate::util::location::{QueryParams, use_search_params};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Receipt {
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    pub service: Option<&'static ServiceItem>,
}

pub(crate) fn receipt_from(params: &QueryParams) -> Result<Receipt, RenderError> {
    let order_id = params.get_non_empty("order_id").map(str::to_owned);
    let payment_id = params.get_non_empty("payment_id").map(str::to_owned);
    if order_id.is_none() && payment_id.is_none() {
        return Err(RenderError::Invalid("checkout confirmation without order or payment id".to_owned()));
    }
    let service = params.get_non_empty("service").and_then(find_service);
    Ok(Receipt { order_id, payment_id, service })
}

#[component]
pub fn CheckoutSuccessPage() -> impl IntoView {
    view! {
        <Title text="Thank you | DevStudio"/>
        <section class="section">
            <h1>"Thank you!"</h1>
            <Deferred placeholder="Loading your receipt…">
                <FailureBoundary label="checkout-receipt">
                    <ReceiptView/>
                </FailureBoundary>
            </Deferred>
        </section>
    }
}

#[component]
fn ReceiptView() -> impl IntoView {
    let params = use_search_params();

    move || {
        params.with(receipt_from).map(|receipt| {
            view! {
                <div class="receipt">
                    {receipt.service.map(|s| view! { <p>"Service: " {s.title}</p> })}
                    {receipt.order_id.map(|id| view! { <p>"Order reference: " <code>{id}</code></p> })}
                    {receipt.payment_id.map(|id| view! { <p>"Payment reference: " <code>{id}</code></p> })}
                    <p>"We'll email you within one business day to schedule a kickoff call."</p>
                    <A href="/dashboard" attr:class="button">"Go to your dashboard"</A>
                </div>
            }
        })
    }
}
