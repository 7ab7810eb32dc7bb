//! Handlers for the RPC endpoints.
//!
//! Every request goes through the validation guard first; only requests that
//! pass are handed to the backend.

use axum::extract::{Path, State};
use axum::Json;
use killrvideo_core::request::{Request, RequestKind};
use killrvideo_core::validation::ReplySlot;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate, then hand off to the backend.
async fn dispatch(state: &AppState, request: Request) -> AppResult<Json<DataResponse<Value>>> {
    let mut reply = ReplySlot::default();
    if state.guard.check(&request, &mut reply).is_err() {
        return Err(match reply.into_rejection() {
            Some(rejection) => AppError::Rejected(rejection),
            None => AppError::InternalError("rejected request produced no reply".into()),
        });
    }

    let method = request.kind();
    let data = state.backend.handle(request).await?;
    tracing::debug!(%method, "Request handled");

    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// POST /rpc
// ---------------------------------------------------------------------------

/// Invoke a method given as `{"method": ..., "params": {...}}`.
pub async fn invoke(
    State(state): State<AppState>,
    Json(request): Json<Request>,
) -> AppResult<Json<DataResponse<Value>>> {
    dispatch(&state, request).await
}

// ---------------------------------------------------------------------------
// POST /rpc/{method}
// ---------------------------------------------------------------------------

/// Invoke a method named in the path, with the params object as the body.
pub async fn invoke_method(
    State(state): State<AppState>,
    Path(method): Path<String>,
    Json(params): Json<Value>,
) -> AppResult<Json<DataResponse<Value>>> {
    let kind: RequestKind = method.parse()?;
    let request: Request = serde_json::from_value(json!({
        "method": kind.method(),
        "params": params,
    }))
    .map_err(|e| AppError::BadRequest(format!("Invalid params for {kind}: {e}")))?;

    dispatch(&state, request).await
}

// ---------------------------------------------------------------------------
// GET /rpc/methods
// ---------------------------------------------------------------------------

/// List every method the service accepts.
pub async fn list_methods() -> Json<DataResponse<Vec<&'static str>>> {
    let data = RequestKind::ALL.iter().map(|kind| kind.method()).collect();
    Json(DataResponse { data })
}
