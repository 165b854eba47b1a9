use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    /// Reservation date and time arrive as free-form strings from the client
    pub date: String,
    pub time: String,
    pub guests: i32,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(new: NewBooking) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: new.email,
            name: new.name,
            phone: new.phone,
            date: new.date,
            time: new.time,
            guests: new.guests,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub date: String,
    pub time: String,
    pub guests: i32,
}
