//! Todo CRUD surface.
//!
//! Request bodies are explicit schemas validated at the boundary —
//! `title` must be non-empty after trimming, `completed` defaults to
//! false on create.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use hart_core::models::todo::{CreateTodo, UpdateTodo};
use hart_core::repository::TodoRepository;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_one).put(update).delete(delete_one))
}

#[derive(Debug, Deserialize)]
struct CreateTodoBody {
    title: String,
    completed: Option<bool>,
}

async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoBody>,
) -> ApiResult<Json<Value>> {
    let input = CreateTodo::new(&body.title, body.completed)?;
    let todo = state.todos.create(input).await?;
    Ok(Json(json!({"message": "todo created", "data": todo})))
}

#[derive(Debug, Deserialize)]
struct ListParams {
    completed: Option<bool>,
}

async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Value>> {
    let todos = state.todos.list(params.completed).await?;
    Ok(Json(json!({"message": "todos fetched", "data": todos})))
}

async fn get_one(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Value>> {
    let todo = state.todos.get(id).await?;
    Ok(Json(json!({"message": "todo fetched", "data": todo})))
}

#[derive(Debug, Deserialize)]
struct UpdateTodoBody {
    title: String,
    completed: bool,
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateTodoBody>,
) -> ApiResult<Json<Value>> {
    let input = UpdateTodo::new(&body.title, body.completed)?;
    let todo = state.todos.update(id, input).await?;
    Ok(Json(json!({"message": "todo updated", "data": todo})))
}

async fn delete_one(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Value>> {
    state.todos.delete(id).await?;
    Ok(Json(json!({"message": "todo deleted"})))
}
