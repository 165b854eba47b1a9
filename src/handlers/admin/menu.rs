use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{AdminUser, ApiResponse, ApiResult};
use crate::models::{MenuItem, NewMenuItem};

/// POST /menu - add a menu item
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<NewMenuItem>,
) -> ApiResult<MenuItem> {
    let item = state.store.insert_menu_item(payload).await?;
    Ok(ApiResponse::created(item))
}

/// PATCH /menu/:id - replace the item's editable field set
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(payload): Json<NewMenuItem>,
) -> ApiResult<Value> {
    let id = parse_id(&id, "menu item")?;

    let modified = state.store.update_menu_item(id, payload).await?;
    if modified == 0 {
        return Err(ApiError::not_found(format!("Menu item {} not found", id)));
    }

    Ok(ApiResponse::success(json!({ "modified": modified })))
}

/// DELETE /menu/:id - remove a menu item
pub async fn remove(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id(&id, "menu item")?;

    let deleted = state.store.delete_menu_item(id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found(format!("Menu item {} not found", id)));
    }

    Ok(ApiResponse::success(json!({ "deleted": deleted })))
}
