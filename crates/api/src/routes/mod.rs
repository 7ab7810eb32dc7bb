pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /rpc                 POST  invoke ({"method", "params"} body)
/// /rpc/methods         GET   list accepted methods
/// /rpc/{method}        POST  invoke (params body)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/rpc", post(handlers::rpc::invoke))
        .route("/rpc/methods", get(handlers::rpc::list_methods))
        .route("/rpc/{method}", post(handlers::rpc::invoke_method))
}
