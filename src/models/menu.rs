use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub img: Option<String>,
    pub short_desc: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MenuItem {
    pub fn new(new: NewMenuItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            category: new.category,
            price: new.price,
            img: new.img,
            short_desc: new.short_desc,
            description: new.description,
            created_at: Utc::now(),
        }
    }
}

/// Request payload for create and for update, which replaces this fixed field
/// set wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub img: Option<String>,
    pub short_desc: Option<String>,
    pub description: Option<String>,
}
