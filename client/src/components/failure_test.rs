use super::*;
use leptos::prelude::*;
use leptos::error::Errors;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Server render
// =============================================================================

#[test]
fn failing_child_renders_fallback_without_error_text() {
    let html = Owner::new().with(|| {
        view! {
            <FailureBoundary label="receipt">
                {|| Err::<&'static str, _>(RenderError::Data("connection refused by db-primary".into()))}
            </FailureBoundary>
        }
        .to_html()
    });
    assert!(html.contains(FALLBACK_MESSAGE));
    assert!(html.contains(RETRY_LABEL));
    assert!(!html.contains("db-primary"));
}

#[test]
fn healthy_child_renders_normally() {
    let html = Owner::new().with(|| {
        view! {
            <FailureBoundary label="receipt">
                <p class="receipt">"Order reference"</p>
            </FailureBoundary>
        }
        .to_html()
    });
    assert!(html.contains("Order reference"));
    assert!(!html.contains(FALLBACK_MESSAGE));
}

// =============================================================================
// Retry
// =============================================================================

#[test]
fn restart_clears_errors_and_starts_new_attempt() {
    Owner::new().with(|| {
        let errors = ArcRwSignal::new(Errors::default());
        errors.update(|e| e.insert_with_default_key(RenderError::Data("offers".into())));
        let attempt = RwSignal::new(0_u64);

        restart(&errors, attempt);

        assert!(errors.with_untracked(Errors::is_empty));
        assert_eq!(attempt.get_untracked(), 1);
    });
}

#[test]
fn new_attempt_rebuilds_children() {
    Owner::new().with(|| {
        let builds = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&builds);
        let children: ChildrenFn = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            ().into_any()
        });
        let attempt = RwSignal::new(0_u64);
        let render = remount(attempt, children);

        let seen = Arc::clone(&builds);
        let rendered = Memo::new(move |_| {
            let _view = render();
            seen.load(Ordering::SeqCst)
        });

        assert_eq!(rendered.get(), 1);
        assert_eq!(rendered.get(), 1, "no rebuild without a retry");

        let errors = ArcRwSignal::new(Errors::default());
        restart(&errors, attempt);
        assert_eq!(rendered.get(), 2);
        assert_eq!(builds.load(Ordering::SeqCst), 2);
    });
}
