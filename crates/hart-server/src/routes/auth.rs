//! Login, signup, federated login, and logout.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use hart_auth::service::{FederatedLoginInput, LoginInput, SignupInput};
use hart_core::error::HartError;
use serde::Deserialize;
use serde_json::json;

use crate::cookie;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/federated-login", post(federated_login))
        .route("/logout", post(logout))
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> ApiResult<impl IntoResponse> {
    let out = state
        .auth
        .login(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await
        .map_err(|e| match e {
            HartError::AuthenticationFailed { .. } => {
                ApiError::bad_request("Username or password is incorrect")
            }
            other => other.into(),
        })?;

    Ok((
        [(
            header::SET_COOKIE,
            cookie::session_cookie(&out.session_token, out.expires_in),
        )],
        Json(json!({"message": "Login successful"})),
    ))
}

#[derive(Debug, Deserialize)]
struct SignupBody {
    username: String,
    password: String,
    profile_picture_url: Option<String>,
}

async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> ApiResult<Json<serde_json::Value>> {
    state
        .auth
        .signup(SignupInput {
            username: body.username,
            password: body.password,
            profile_picture_url: body.profile_picture_url,
        })
        .await
        .map_err(|e| match e {
            HartError::AlreadyExists { .. } => ApiError::bad_request("Username already taken"),
            other => other.into(),
        })?;

    Ok(Json(json!({"message": "Signup successful"})))
}

#[derive(Debug, Deserialize)]
struct FederatedLoginBody {
    username: String,
    profile_picture_url: Option<String>,
}

async fn federated_login(
    State(state): State<AppState>,
    Json(body): Json<FederatedLoginBody>,
) -> ApiResult<impl IntoResponse> {
    let out = state
        .auth
        .federated_login(FederatedLoginInput {
            username: body.username,
            profile_picture_url: body.profile_picture_url,
        })
        .await?;

    Ok((
        [(
            header::SET_COOKIE,
            cookie::session_cookie(&out.session_token, out.expires_in),
        )],
        Json(json!({"message": "Federated login successful"})),
    ))
}

async fn logout() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, cookie::clear_session_cookie())],
        Json(json!({"message": "Logout successful"})),
    )
}
