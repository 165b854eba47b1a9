use axum::extract::State;
use axum::Json;

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{Booking, NewBooking};

/// POST /bookings - reserve a table. Open to unauthenticated callers.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewBooking>,
) -> ApiResult<Booking> {
    let booking = state.store.insert_booking(payload).await?;
    Ok(ApiResponse::created(booking))
}
