use axum::extract::State;
use axum::Json;

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{NewReview, Review};

/// POST /reviews - submit a review
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewReview>,
) -> ApiResult<Review> {
    let review = state.store.insert_review(payload).await?;
    Ok(ApiResponse::created(review))
}

/// GET /reviews - all reviews
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Review>> {
    let reviews = state.store.list_reviews().await?;
    Ok(ApiResponse::success(reviews))
}
