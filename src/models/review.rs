use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    pub details: String,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(new: NewReview) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            details: new.details,
            rating: new.rating,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub name: String,
    pub details: String,
    pub rating: f64,
}
