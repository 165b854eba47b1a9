use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{require_owner, ApiResponse, ApiResult, AuthUser};
use crate::models::{CartItem, NewCartItem};

use super::OwnerQuery;

/// POST /carts - add an item to the caller's cart
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(payload): Json<NewCartItem>,
) -> ApiResult<CartItem> {
    let item = state.store.insert_cart_item(payload).await?;
    Ok(ApiResponse::created(item))
}

/// GET /carts?email= - the caller's cart contents
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<OwnerQuery>,
) -> ApiResult<Vec<CartItem>> {
    let email = query.email.unwrap_or_else(|| auth.email.clone());
    require_owner(&auth, &email)?;

    let items = state.store.list_cart_items(&email).await?;
    Ok(ApiResponse::success(items))
}

/// DELETE /carts/:id - remove a single cart item
pub async fn remove(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id(&id, "cart item")?;

    let deleted = state.store.delete_cart_item(id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Cart item not found"));
    }

    Ok(ApiResponse::success(json!({ "deleted": deleted })))
}
