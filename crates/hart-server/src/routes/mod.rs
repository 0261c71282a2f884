//! Route registration and the request-time authentication helper.

pub mod auth;
pub mod todos;
pub mod users;

use axum::Router;
use axum::http::HeaderMap;
use axum::routing::get;
use hart_auth::Principal;
use hart_core::error::HartError;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::cookie;
use crate::error::ApiError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1/auth", auth::router())
        .nest("/api/v1/todos", todos::router())
        .nest("/api/v1", users::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> axum::Json<Value> {
    axum::Json(json!({"ok": true}))
}

/// Gate: verify the session cookie and return the principal, or 401.
pub(crate) fn require_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Principal, ApiError> {
    let token = cookie::session_token(headers);
    state
        .authenticator
        .verify(token.as_deref())
        .map_err(|e| ApiError::from(HartError::from(e)))
}
