//! Profile and admin routes — the authenticated surface.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use hart_core::models::user::User;
use hart_core::repository::{Pagination, UserRepository};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::routes::require_session;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/profile", get(profile))
        .route("/admin/users", get(admin_users))
}

/// Public projection of a user — never exposes the password hash.
#[derive(Debug, Serialize)]
struct UserView {
    id: Uuid,
    username: String,
    role: Option<String>,
    profile_picture_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            profile_picture_url: user.profile_picture_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

async fn profile(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Json<Value>> {
    let principal = require_session(&state, &headers)?;

    // Re-fetch — the token only proves identity, the record may have
    // changed or vanished since issuance.
    let user = state.users.get_by_id(principal.subject_id).await?;

    Ok(Json(json!({
        "message": "current user profile fetched",
        "data": UserView::from(user),
    })))
}

#[derive(Debug, Deserialize)]
struct PageParams {
    offset: Option<u64>,
    limit: Option<u64>,
}

async fn admin_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Value>> {
    let principal = require_session(&state, &headers)?;
    state.authenticator.authorize(principal, "admin").await?;

    let defaults = Pagination::default();
    let page = state
        .users
        .list(Pagination {
            offset: params.offset.unwrap_or(defaults.offset),
            limit: params.limit.unwrap_or(defaults.limit),
        })
        .await?;

    let items: Vec<UserView> = page.items.into_iter().map(UserView::from).collect();
    Ok(Json(json!({
        "message": "All users fetched",
        "data": items,
        "total": page.total,
        "offset": page.offset,
        "limit": page.limit,
    })))
}
