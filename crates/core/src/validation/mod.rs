//! Request validation engine.
//!
//! Provides rule types, the per-variant rule catalog, a pure-logic
//! validator, and the rejection path that reports failures to the caller.

pub mod aggregator;
pub mod catalog;
pub mod guard;
pub mod rejection;
pub mod rules;
pub mod validator;

pub use catalog::RuleCatalog;
pub use guard::RequestGuard;
pub use rejection::{
    ErrorSink, Rejected, Rejection, RejectionCode, RejectionEmitter, ReplySlot, ResponseChannel,
    TracingSink,
};
pub use rules::{FieldViolation, Rule, RuleSet, ValidationOutcome, ViolationKind};
pub use validator::Validator;
