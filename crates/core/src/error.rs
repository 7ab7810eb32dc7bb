use crate::request::RequestKind;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A request variant has no rules registered. Raised while building the
    /// validator, never while handling a request.
    #[error("No validation rules registered for {kind}")]
    Registration { kind: RequestKind },
}
