//! Special offers page with prices converted to INR.
//!
//! Offers and the exchange rate load in the browser; the server renders the
//! suspense fallback. A failed offers fetch trips the page's failure
//! boundary, while a failed rate lookup just hides the INR column.

#[cfg(test)]
#[path = "offers_test.rs"]
mod offers_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::boundary::RenderError;
use crate::catalog::{SERVICES, format_inr, format_usd};
use crate::components::failure::FailureBoundary;
use crate::net::api;
use crate::net::types::{Offer, RateQuote};

pub(crate) fn discount_label(offer: &Offer) -> String {
    format!("{}% off", offer.discount_percent.clamp(0, 100))
}

/// Caption under the price table, if the INR column is shown at all.
pub(crate) fn rate_caption(quote: Option<&RateQuote>) -> Option<String> {
    let quote = quote?;
    if quote.is_fallback() {
        Some(format!("INR prices use an approximate rate of {:.2}.", quote.rate))
    } else {
        Some(format!("1 {} = {:.2} {}", quote.base, quote.rate, quote.currency))
    }
}

#[component]
pub fn OffersPage() -> impl IntoView {
    let rate = LocalResource::new(api::fetch_rate);

    view! {
        <Title text="Special offers | DevStudio"/>
        <section class="section">
            <h1>"Special offers"</h1>
            <FailureBoundary label="offers">
                <OfferFeed/>
            </FailureBoundary>
        </section>
        <section class="section">
            <h2>"Prices"</h2>
            <Suspense fallback=|| view! { <p class="deferred-placeholder">"Loading prices…"</p> }>
                {move || Suspend::new(async move {
                    let quote = rate.await;
                    view! { <PriceTable quote/> }
                })}
            </Suspense>
        </section>
    }
}

/// Owns the offers fetch, so a boundary retry fetches again.
#[component]
fn OfferFeed() -> impl IntoView {
    let offers = LocalResource::new(api::fetch_offers);
    view! {
        <Suspense fallback=|| view! { <p class="deferred-placeholder">"Loading offers…"</p> }>
            {move || Suspend::new(async move {
                let list = offers.await.map_err(RenderError::Data)?;
                Ok::<_, RenderError>(view! { <OfferList offers=list/> })
            })}
        </Suspense>
    }
}

#[component]
fn OfferList(offers: Vec<Offer>) -> impl IntoView {
    if offers.is_empty() {
        return view! { <p>"No offers running right now. Check back soon."</p> }.into_any();
    }
    view! {
        <div class="card-grid">
            {offers
                .into_iter()
                .map(|offer| {
                    let badge = discount_label(&offer);
                    view! {
                        <article class="offer-card">
                            <span class="offer-card__badge">{badge}</span>
                            <h3>{offer.title}</h3>
                            <p>{offer.description}</p>
                            {offer.code.map(|code| view! { <p class="offer-card__code">"Code: " <code>{code}</code></p> })}
                            {offer.valid_until.map(|until| view! { <p class="offer-card__until">"Valid until " {until}</p> })}
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn PriceTable(quote: Option<RateQuote>) -> impl IntoView {
    let caption = rate_caption(quote.as_ref());
    let rate = quote.map(|q| q.rate);
    view! {
        <table class="price-table">
            <thead>
                <tr>
                    <th>"Service"</th>
                    <th>"USD"</th>
                    {rate.map(|_| view! { <th>"INR"</th> })}
                </tr>
            </thead>
            <tbody>
                {SERVICES
                    .iter()
                    .map(|s| {
                        view! {
                            <tr>
                                <td>{s.title}</td>
                                <td>{format_usd(s.price_usd)}</td>
                                {rate.map(|r| view! { <td>{format_inr(s.price_usd, r)}</td> })}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
        {caption.map(|c| view! { <p class="price-table__caption">{c}</p> })}
    }
}
