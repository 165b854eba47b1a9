pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    Booking, CartItem, MenuItem, NewBooking, NewCartItem, NewMenuItem, NewPayment, NewReview,
    NewUser, Payment, PaymentReceipt, Review, User,
};

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Errors from store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Totals for the admin dashboard. Revenue is a plain sum over payment
/// prices with no currency normalization.
#[derive(Debug, Clone, Serialize)]
pub struct AdminStats {
    pub users: i64,
    pub cart_items: i64,
    pub revenue: f64,
}

/// Per-category order count and revenue, from joining payment menu
/// references against the menu collection.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CategoryStat {
    pub category: String,
    pub count: i64,
    pub revenue: f64,
}

/// The system of record. One implementation per backing database; handlers
/// only ever see this trait. Each method is a single logical document
/// operation. `record_payment` is the one two-phase mutation; an
/// implementation may make it atomic without changing the contract.
#[async_trait]
pub trait Store: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;

    // Users
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn insert_user(&self, new: NewUser) -> Result<User, StoreError>;
    /// Set the admin role. Returns the number of records modified; zero means
    /// the user is absent or already an admin.
    async fn promote_user(&self, id: Uuid) -> Result<u64, StoreError>;
    async fn delete_user(&self, id: Uuid) -> Result<u64, StoreError>;

    // Menu
    async fn list_menu(&self) -> Result<Vec<MenuItem>, StoreError>;
    async fn get_menu_item(&self, id: Uuid) -> Result<Option<MenuItem>, StoreError>;
    async fn insert_menu_item(&self, new: NewMenuItem) -> Result<MenuItem, StoreError>;
    /// Replace the fixed field set. Returns the number of records modified.
    async fn update_menu_item(&self, id: Uuid, new: NewMenuItem) -> Result<u64, StoreError>;
    async fn delete_menu_item(&self, id: Uuid) -> Result<u64, StoreError>;

    // Carts
    async fn insert_cart_item(&self, new: NewCartItem) -> Result<CartItem, StoreError>;
    async fn list_cart_items(&self, email: &str) -> Result<Vec<CartItem>, StoreError>;
    async fn delete_cart_item(&self, id: Uuid) -> Result<u64, StoreError>;

    // Bookings
    async fn insert_booking(&self, new: NewBooking) -> Result<Booking, StoreError>;
    async fn list_bookings(&self, email: &str) -> Result<Vec<Booking>, StoreError>;
    async fn delete_booking(&self, id: Uuid) -> Result<u64, StoreError>;

    // Reviews
    async fn insert_review(&self, new: NewReview) -> Result<Review, StoreError>;
    async fn list_reviews(&self) -> Result<Vec<Review>, StoreError>;

    // Payments
    /// Insert the payment record, then delete the referenced cart items.
    /// Deleting an absent cart id is not an error.
    async fn record_payment(&self, new: NewPayment) -> Result<PaymentReceipt, StoreError>;
    async fn list_payments(&self, email: &str) -> Result<Vec<Payment>, StoreError>;

    // Reporting
    async fn admin_stats(&self) -> Result<AdminStats, StoreError>;
    /// Unwind payment menu references, join the menu collection, group by
    /// category. References to deleted menu items contribute nothing.
    async fn order_stats(&self) -> Result<Vec<CategoryStat>, StoreError>;
}
