use axum::extract::{Path, State};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{AdminUser, ApiResponse, ApiResult};
use crate::models::User;

/// GET /users - all user records
pub async fn list(State(state): State<AppState>, _admin: AdminUser) -> ApiResult<Vec<User>> {
    let users = state.store.list_users().await?;
    Ok(ApiResponse::success(users))
}

/// PATCH /users/:id - grant the admin role.
///
/// Zero-effect when the user is absent or already an admin, reported as 404.
pub async fn promote(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id(&id, "user")?;

    let modified = state.store.promote_user(id).await?;
    if modified == 0 {
        return Err(ApiError::not_found("User not found or already an admin"));
    }

    Ok(ApiResponse::success(json!({ "modified": modified })))
}

/// DELETE /users/:id - remove a user record
pub async fn remove(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id(&id, "user")?;

    let deleted = state.store.delete_user(id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("User not found"));
    }

    Ok(ApiResponse::success(json!({ "deleted": deleted })))
}
