//! Validation gate placed in front of every request handler.

use std::sync::Arc;

use crate::request::Request;

use super::rejection::{ErrorSink, Rejected, RejectionEmitter, ResponseChannel};
use super::validator::Validator;

/// Runs a request through the [`Validator`] and, on failure, emits the
/// rejection to the caller's channel.
///
/// ```ignore
/// guard.check(&request, &mut reply)?;
/// // only valid requests get here
/// ```
#[derive(Debug)]
pub struct RequestGuard<S> {
    validator: Arc<Validator>,
    emitter: RejectionEmitter<S>,
}

impl<S: ErrorSink> RequestGuard<S> {
    pub fn new(validator: Arc<Validator>, sink: S) -> Self {
        Self {
            validator,
            emitter: RejectionEmitter::new(sink),
        }
    }

    /// `Ok(())` hands control back to the caller unchanged. `Err(Rejected)`
    /// means the channel has already received the rejection and been
    /// completed.
    pub fn check(
        &self,
        request: &Request,
        channel: &mut dyn ResponseChannel,
    ) -> Result<(), Rejected> {
        let outcome = self.validator.validate(request);
        if outcome.valid {
            return Ok(());
        }
        Err(self.emitter.emit(outcome.description, channel))
    }
}
