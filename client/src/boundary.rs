//! Render boundaries: deferred slots and failure boundaries.
//!
//! DESIGN
//! ======
//! Both boundaries are plain state machines with no Leptos dependency; the
//! components in `components::deferred` and `components::failure` drive them
//! from reactive signals.
//!
//! - [`DeferredSlot`] goes `Pending → Ready` exactly once and shows its
//!   placeholder until then.
//! - [`FailureBoundary`] goes `Normal → Failed` when a render returns
//!   `Err`, reports the failure to a [`ReportSink`] before the fallback is
//!   produced, and only returns to `Normal` through [`FailureBoundary::retry`].

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;

/// Placeholder used when a caller does not supply one.
pub const DEFAULT_PLACEHOLDER: &str = "Loading…";

/// Headline shown by a failed boundary. The captured error is never shown.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Label of the single action offered by a failed boundary.
pub const RETRY_LABEL: &str = "Try again";

// =============================================================================
// DEFERRED SLOT
// =============================================================================

/// What a deferred slot should display right now.
#[derive(Debug, PartialEq, Eq)]
pub enum Phase<'a, T> {
    Placeholder(&'a str),
    Content(&'a T),
}

/// A subtree whose data dependency may not be available yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeferredSlot<T> {
    placeholder: String,
    value: Option<T>,
}

impl<T> DeferredSlot<T> {
    /// Pending slot with the given placeholder.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self { placeholder: placeholder.into(), value: None }
    }

    /// Pending slot with [`DEFAULT_PLACEHOLDER`].
    #[must_use]
    pub fn with_default_placeholder() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }

    /// Supply the resolved value. Only the first resolution is kept.
    ///
    /// Returns `true` if this call moved the slot to ready.
    pub fn resolve(&mut self, value: T) -> bool {
        if self.value.is_some() {
            return false;
        }
        self.value = Some(value);
        true
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.value.is_some()
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    #[must_use]
    pub fn view(&self) -> Phase<'_, T> {
        match &self.value {
            Some(value) => Phase::Content(value),
            None => Phase::Placeholder(&self.placeholder),
        }
    }
}

// =============================================================================
// RENDER ERRORS
// =============================================================================

/// Error raised while rendering a subtree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Data the subtree needs could not be loaded.
    #[error("data unavailable: {0}")]
    Data(String),
    /// Input (URL, payload) was malformed.
    #[error("invalid input: {0}")]
    Invalid(String),
    /// Anything else thrown by the subtree.
    #[error("{0}")]
    Other(String),
}

impl RenderError {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Data(_) => "data",
            Self::Invalid(_) => "invalid",
            Self::Other(_) => "other",
        }
    }
}

/// Error plus metadata captured by a failed boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedError {
    /// Label of the boundary that caught the error.
    pub boundary: String,
    /// Short error category (see [`RenderError::kind`]).
    pub kind: &'static str,
    /// Full error text, for logs only.
    pub message: String,
}

// =============================================================================
// REPORTING
// =============================================================================

/// Observability sink notified on every `Normal → Failed` transition.
pub trait ReportSink {
    fn report(&self, error: &CapturedError);
}

/// Sink writing to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn report(&self, error: &CapturedError) {
        log::error!(
            "render failed in boundary '{}' ({}): {}",
            error.boundary,
            error.kind,
            error.message
        );
    }
}

// =============================================================================
// FAILURE BOUNDARY
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Normal,
    Failed(CapturedError),
}

/// Result of rendering through a failure boundary.
#[derive(Debug, PartialEq, Eq)]
pub enum Rendered<C> {
    Content(C),
    Fallback,
}

/// Catches render errors of one subtree and substitutes fallback content.
#[derive(Debug)]
pub struct FailureBoundary<S = LogSink> {
    label: String,
    state: BoundaryState,
    sink: S,
}

impl FailureBoundary<LogSink> {
    /// Boundary reporting to the application log.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_sink(label, LogSink)
    }
}

impl<S: ReportSink> FailureBoundary<S> {
    pub fn with_sink(label: impl Into<String>, sink: S) -> Self {
        Self { label: label.into(), state: BoundaryState::Normal, sink }
    }

    #[must_use]
    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.state, BoundaryState::Failed(_))
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Render the subtree, or the fallback if this boundary has failed.
    ///
    /// `render` is not invoked while the boundary is `Failed`.
    pub fn render<C, F>(&mut self, render: F) -> Rendered<C>
    where
        F: FnOnce() -> Result<C, RenderError>,
    {
        if self.is_failed() {
            return Rendered::Fallback;
        }
        match render() {
            Ok(content) => Rendered::Content(content),
            Err(err) => {
                self.fail(&err);
                Rendered::Fallback
            }
        }
    }

    /// Record a failure raised outside [`render`](Self::render), e.g. by an
    /// asynchronous child. No-op if already failed.
    pub fn fail(&mut self, err: &RenderError) {
        if self.is_failed() {
            return;
        }
        let captured = CapturedError {
            boundary: self.label.clone(),
            kind: err.kind(),
            message: err.to_string(),
        };
        self.sink.report(&captured);
        self.state = BoundaryState::Failed(captured);
    }

    /// User-initiated reset. Clears the captured error so the next render
    /// attempts the original subtree again.
    ///
    /// Returns `true` if the boundary was failed.
    pub fn retry(&mut self) -> bool {
        let was_failed = self.is_failed();
        self.state = BoundaryState::Normal;
        was_failed
    }
}
