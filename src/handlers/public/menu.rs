use axum::extract::{Path, State};

use crate::app::AppState;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::MenuItem;

/// GET /menu - full menu listing
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<MenuItem>> {
    let items = state.store.list_menu().await?;
    Ok(ApiResponse::success(items))
}

/// GET /menu/:id - single menu item
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<MenuItem> {
    let id = parse_id(&id, "menu item")?;

    let item = state
        .store
        .get_menu_item(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Menu item {} not found", id)))?;

    Ok(ApiResponse::success(item))
}
