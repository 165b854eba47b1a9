use axum::extract::State;

use crate::app::AppState;
use crate::middleware::{AdminUser, ApiResponse, ApiResult};
use crate::store::{AdminStats, CategoryStat};

/// GET /admin-stats - user count, cart-item count, and summed payment
/// revenue for the dashboard
pub async fn admin_stats(State(state): State<AppState>, _admin: AdminUser) -> ApiResult<AdminStats> {
    let stats = state.store.admin_stats().await?;
    Ok(ApiResponse::success(stats))
}

/// GET /order-stats - order count and revenue grouped by menu category
pub async fn order_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Vec<CategoryStat>> {
    let stats = state.store.order_stats().await?;
    Ok(ApiResponse::success(stats))
}
