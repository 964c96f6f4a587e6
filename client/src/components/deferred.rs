//! Deferred-render wrapper for URL-dependent subtrees.
//!
//! SYSTEM CONTEXT
//! ==============
//! Query parameters and the fragment only exist in the browser, after the
//! initial server render. Any component that reads them through
//! `util::location` must sit inside `<Deferred>`: the server and the first
//! hydration pass both render the placeholder, and the children appear once
//! the first client effect resolves the slot. Effects never run during SSR,
//! so the order is always placeholder first, content second.

#[cfg(test)]
#[path = "deferred_test.rs"]
mod deferred_test;

use leptos::prelude::*;

use crate::boundary::{DEFAULT_PLACEHOLDER, DeferredSlot};

/// Show `placeholder` until a browser context is available, then `children`.
#[component]
pub fn Deferred(
    /// Text shown while pending. Defaults to [`DEFAULT_PLACEHOLDER`].
    #[prop(optional, into)]
    placeholder: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let slot = RwSignal::new(DeferredSlot::<()>::new(
        placeholder.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_owned()),
    ));

    Effect::new(move || {
        slot.update(|s| {
            s.resolve(());
        });
    });

    view! {
        <Show
            when=move || slot.with(|s| s.is_ready())
            fallback=move || {
                view! {
                    <div class="deferred-placeholder" aria-busy="true">
                        {move || slot.with(|s| s.placeholder().to_owned())}
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
