//! Render-failure wrapper around Leptos' `ErrorBoundary`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Children may render `Result<_, RenderError>`; an `Err` anywhere below
//! flips the boundary to its fallback. Each caught error is reported through
//! the boundary model (and so to the log) before the fallback is shown. The
//! error text itself never reaches the page.
//!
//! `ErrorBoundary` builds its children once, so clearing the error alone
//! would only swap the failed child back in. Retrying also bumps an attempt
//! counter that the children closure tracks, which rebuilds the subtree from
//! scratch: resources created inside it are created (and fetched) again.

#[cfg(test)]
#[path = "failure_test.rs"]
mod failure_test;

use leptos::error::Errors;
use leptos::prelude::*;

use crate::boundary::{FALLBACK_MESSAGE, FailureBoundary as BoundaryModel, RETRY_LABEL, RenderError};

/// Rebuild `children` every time `attempt` changes.
pub(crate) fn remount(attempt: RwSignal<u64>, children: ChildrenFn) -> impl Fn() -> AnyView + Send + Sync + 'static {
    move || {
        attempt.track();
        children()
    }
}

/// Clear the caught errors, then start a fresh render attempt.
///
/// Errors are cleared first so a child that fails again during the rebuild
/// reports into an empty set.
pub(crate) fn restart(errors: &ArcRwSignal<Errors>, attempt: RwSignal<u64>) {
    errors.set(Errors::default());
    attempt.update(|n| *n += 1);
}

/// Catch render errors from `children` and show a generic retry prompt.
#[component]
pub fn FailureBoundary(
    /// Name used in log reports.
    #[prop(into)]
    label: String,
    children: ChildrenFn,
) -> impl IntoView {
    let model = StoredValue::new(BoundaryModel::new(label));
    let attempt = RwSignal::new(0_u64);

    let fallback = move |errors: ArcRwSignal<Errors>| {
        for (_, err) in errors.get_untracked() {
            model.update_value(|m| m.fail(&RenderError::Other(err.to_string())));
        }

        let on_retry = move |_| {
            model.update_value(|m| {
                m.retry();
            });
            restart(&errors, attempt);
        };

        view! {
            <div class="failure-boundary" role="alert">
                <p class="failure-boundary__message">{FALLBACK_MESSAGE}</p>
                <button class="button button--secondary" on:click=on_retry>
                    {RETRY_LABEL}
                </button>
            </div>
        }
    };

    let attempt_children = remount(attempt, children);
    view! { <ErrorBoundary fallback=fallback>{attempt_children}</ErrorBoundary> }
}
