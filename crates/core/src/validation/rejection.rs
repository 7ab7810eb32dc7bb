//! Turning a failed validation into a caller-visible rejection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification carried by every rejection. Validation failures are always
/// caller-correctable, so there is only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionCode {
    InvalidArgument,
}

impl RejectionCode {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectionCode::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

impl fmt::Display for RejectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the caller receives when its request fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {description}")]
pub struct Rejection {
    pub code: RejectionCode,
    pub description: String,
}

impl Rejection {
    pub fn invalid_argument(description: impl Into<String>) -> Self {
        Self {
            code: RejectionCode::InvalidArgument,
            description: description.into(),
        }
    }
}

/// Destination for rejection descriptions, written at error severity.
pub trait ErrorSink: Send + Sync {
    fn report(&self, description: &str);
}

/// Reports through `tracing` at `ERROR` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, description: &str) {
        tracing::error!("{description}");
    }
}

/// The caller's reply stream for a single request.
pub trait ResponseChannel {
    fn on_error(&mut self, rejection: Rejection);
    fn on_completed(&mut self);
}

/// Single-reply channel that keeps the rejection for the handler to return.
#[derive(Debug, Default)]
pub struct ReplySlot {
    rejection: Option<Rejection>,
    completed: bool,
}

impl ReplySlot {
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }

    pub fn into_rejection(self) -> Option<Rejection> {
        self.rejection
    }
}

impl ResponseChannel for ReplySlot {
    fn on_error(&mut self, rejection: Rejection) {
        if self.completed || self.rejection.is_some() {
            tracing::warn!(%rejection, "Reply already sent, dropping rejection");
            return;
        }
        self.rejection = Some(rejection);
    }

    fn on_completed(&mut self) {
        self.completed = true;
    }
}

/// Proof that a rejection was delivered. Handlers return it instead of
/// continuing to business logic.
#[must_use = "a rejected request must not reach business logic"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected;

/// Reports a composite description to the error sink and delivers the
/// matching rejection to the caller.
#[derive(Debug)]
pub struct RejectionEmitter<S> {
    sink: S,
}

impl<S: ErrorSink> RejectionEmitter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Report, build, deliver, complete; in that order.
    pub fn emit(&self, description: String, channel: &mut dyn ResponseChannel) -> Rejected {
        self.sink.report(&description);
        channel.on_error(Rejection::invalid_argument(description));
        channel.on_completed();
        Rejected
    }
}
