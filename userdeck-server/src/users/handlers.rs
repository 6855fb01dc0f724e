//! User management endpoints.

use axum::http::StatusCode;
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use tracing::info;
use userdeck_model::{CreateUserRequest, UpdateUserRequest, UserId, UserRecord};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// Liveness probe.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "message": "The server is running!" }))
}

pub async fn list_users(
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> AppResult<Json<Vec<UserRecord>>> {
    Ok(Json(state.store.list(&target)))
}

pub async fn create_user(
    State(state): State<AppState>,
    Path(target): Path<String>,
    Json(request): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserRecord>)> {
    let user = state.store.insert(&target, request.name, request.email);

    info!(
        target: "user.admin",
        backend = %target,
        user_id = user.id,
        action = "create"
    );

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path((target, id)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    let id = parse_user_id(&id)?;
    let user = state
        .store
        .get(&target, id)
        .ok_or_else(|| AppError::not_found("User not found!"))?;

    Ok(Json(json!({ "user": user })))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path((target, id)): Path<(String, String)>,
    Json(request): Json<UpdateUserRequest>,
) -> AppResult<Json<Value>> {
    let id = parse_user_id(&id)?;
    state
        .store
        .update(&target, id, request.name, request.email)
        .ok_or_else(|| AppError::not_found("User not found!"))?;

    info!(
        target: "user.admin",
        backend = %target,
        user_id = id,
        action = "update"
    );

    Ok(Json(json!({ "message": "User updated." })))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path((target, id)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    let id = parse_user_id(&id)?;
    state
        .store
        .remove(&target, id)
        .ok_or_else(|| AppError::not_found("User not found!"))?;

    info!(
        target: "user.admin",
        backend = %target,
        user_id = id,
        action = "delete"
    );

    Ok(Json(json!({ "message": "User deleted." })))
}

// The panel sends the update draft's id verbatim, so the segment may be
// arbitrary text rather than a record id.
fn parse_user_id(raw: &str) -> AppResult<UserId> {
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("invalid user id: {raw}")))
}
