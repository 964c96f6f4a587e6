use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct RecordingSink {
    reports: Rc<RefCell<Vec<CapturedError>>>,
}

impl ReportSink for RecordingSink {
    fn report(&self, error: &CapturedError) {
        self.reports.borrow_mut().push(error.clone());
    }
}

// =============================================================================
// DeferredSlot
// =============================================================================

#[test]
fn deferred_slot_shows_placeholder_then_content() {
    let mut slot = DeferredSlot::new("Loading booking…");
    assert_eq!(slot.view(), Phase::Placeholder("Loading booking…"));
    assert!(slot.resolve("web-app"));
    assert_eq!(slot.view(), Phase::Content(&"web-app"));
}

#[test]
fn deferred_slot_never_returns_to_placeholder() {
    let mut slot = DeferredSlot::with_default_placeholder();
    slot.resolve(1);
    assert!(!slot.resolve(2));
    assert_eq!(slot.view(), Phase::Content(&1));
    assert!(slot.is_ready());
}

#[test]
fn deferred_slot_default_placeholder() {
    let slot: DeferredSlot<()> = DeferredSlot::with_default_placeholder();
    assert_eq!(slot.placeholder(), DEFAULT_PLACEHOLDER);
    assert!(!slot.is_ready());
}

#[test]
fn nested_deferred_slots_resolve_independently() {
    let mut outer: DeferredSlot<DeferredSlot<&str>> = DeferredSlot::new("outer");
    outer.resolve(DeferredSlot::new("inner"));
    match outer.view() {
        Phase::Content(inner) => assert_eq!(inner.view(), Phase::Placeholder("inner")),
        Phase::Placeholder(_) => panic!("outer should be ready"),
    }
}

// =============================================================================
// FailureBoundary
// =============================================================================

#[test]
fn boundary_starts_normal_and_renders_content() {
    let mut boundary = FailureBoundary::with_sink("offers", RecordingSink::default());
    assert_eq!(boundary.state(), &BoundaryState::Normal);
    let out = boundary.render(|| Ok::<_, RenderError>("list"));
    assert_eq!(out, Rendered::Content("list"));
}

#[test]
fn boundary_reports_before_showing_fallback() {
    let sink = RecordingSink::default();
    let mut boundary = FailureBoundary::with_sink("offers", sink.clone());
    let out: Rendered<&str> = boundary.render(|| Err(RenderError::Data("upstream 500".into())));
    assert_eq!(out, Rendered::Fallback);
    let reports = sink.reports.borrow();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].boundary, "offers");
    assert_eq!(reports[0].kind, "data");
    assert!(reports[0].message.contains("upstream 500"));
    assert!(boundary.is_failed());
}

#[test]
fn failed_boundary_does_not_rerender_until_retry() {
    let mut boundary = FailureBoundary::with_sink("b", RecordingSink::default());
    let _: Rendered<()> = boundary.render(|| Err(RenderError::Other("boom".into())));
    let mut calls = 0;
    let out = boundary.render(|| {
        calls += 1;
        Ok::<_, RenderError>(())
    });
    assert_eq!(out, Rendered::Fallback);
    assert_eq!(calls, 0);
}

#[test]
fn retry_returns_to_normal_and_reattempts_subtree() {
    let sink = RecordingSink::default();
    let mut boundary = FailureBoundary::with_sink("b", sink.clone());
    let _: Rendered<()> = boundary.render(|| Err(RenderError::Invalid("bad slug".into())));
    assert!(boundary.retry());
    assert_eq!(boundary.state(), &BoundaryState::Normal);
    let out = boundary.render(|| Ok::<_, RenderError>("recovered"));
    assert_eq!(out, Rendered::Content("recovered"));
    assert_eq!(sink.reports.borrow().len(), 1);
}

#[test]
fn retry_on_normal_boundary_is_noop() {
    let mut boundary = FailureBoundary::with_sink("b", RecordingSink::default());
    assert!(!boundary.retry());
    assert_eq!(boundary.state(), &BoundaryState::Normal);
}

#[test]
fn second_failure_while_failed_is_not_reported_twice() {
    let sink = RecordingSink::default();
    let mut boundary = FailureBoundary::with_sink("b", sink.clone());
    boundary.fail(&RenderError::Other("first".into()));
    boundary.fail(&RenderError::Other("second".into()));
    assert_eq!(sink.reports.borrow().len(), 1);
    match boundary.state() {
        BoundaryState::Failed(captured) => assert_eq!(captured.message, "first"),
        BoundaryState::Normal => panic!("expected failed state"),
    }
}

#[test]
fn render_error_kinds() {
    assert_eq!(RenderError::Data(String::new()).kind(), "data");
    assert_eq!(RenderError::Invalid(String::new()).kind(), "invalid");
    assert_eq!(RenderError::Other(String::new()).kind(), "other");
}
