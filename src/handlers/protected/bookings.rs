use axum::extract::{Path, Query, State};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{require_owner, ApiResponse, ApiResult, AuthUser};
use crate::models::Booking;

use super::OwnerQuery;

/// GET /bookings?email= - the caller's reservations
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<OwnerQuery>,
) -> ApiResult<Vec<Booking>> {
    let email = query.email.unwrap_or_else(|| auth.email.clone());
    require_owner(&auth, &email)?;

    let bookings = state.store.list_bookings(&email).await?;
    Ok(ApiResponse::success(bookings))
}

/// DELETE /bookings/:id - cancel a reservation
pub async fn remove(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id(&id, "booking")?;

    let deleted = state.store.delete_booking(id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Booking not found"));
    }

    Ok(ApiResponse::success(json!({ "deleted": deleted })))
}
