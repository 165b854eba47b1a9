use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    pub id: Uuid,
    /// Owner key
    pub email: String,
    pub menu_item_id: Uuid,
    pub name: String,
    pub img: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(new: NewCartItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: new.email,
            menu_item_id: new.menu_item_id,
            name: new.name,
            img: new.img,
            price: new.price,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCartItem {
    pub email: String,
    pub menu_item_id: Uuid,
    pub name: String,
    pub img: Option<String>,
    pub price: f64,
}
