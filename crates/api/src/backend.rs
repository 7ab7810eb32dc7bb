//! Business-logic seam behind the validation gate.

use async_trait::async_trait;
use killrvideo_core::error::CoreError;
use killrvideo_core::request::Request;
use serde_json::{json, Value};

/// Executes a request that has already passed validation.
///
/// Persistence and service logic live behind this trait; the API layer only
/// guarantees that nothing invalid reaches it.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn handle(&self, request: Request) -> Result<Value, CoreError>;
}

/// Acknowledges every request without doing any work. Used when the API runs
/// as a standalone validation front-end.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptingBackend;

#[async_trait]
impl Backend for AcceptingBackend {
    async fn handle(&self, request: Request) -> Result<Value, CoreError> {
        Ok(json!({
            "method": request.kind().method(),
            "status": "accepted",
        }))
    }
}
