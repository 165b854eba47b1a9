use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    Booking, CartItem, MenuItem, NewBooking, NewCartItem, NewMenuItem, NewPayment, NewReview,
    NewUser, Payment, PaymentReceipt, Review, User,
};

use super::{AdminStats, CategoryStat, Store, StoreError};

/// In-process store used by the test suite and for local development when no
/// DATABASE_URL is configured. Semantics mirror PostgresStore exactly,
/// including the non-atomic two-phase payment recording.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    menu: Vec<MenuItem>,
    carts: Vec<CartItem>,
    bookings: Vec<Booking>,
    payments: Vec<Payment>,
    reviews: Vec<Review>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert_user(&self, new: NewUser) -> Result<User, StoreError> {
        let user = User::new(new);
        self.inner.write().await.users.push(user.clone());
        Ok(user)
    }

    async fn promote_user(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.users.iter_mut().find(|u| u.id == id) {
            Some(user) if !user.is_admin() => {
                user.role = Some(crate::models::user::ADMIN_ROLE.to_string());
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn delete_user(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        Ok((before - inner.users.len()) as u64)
    }

    async fn list_menu(&self) -> Result<Vec<MenuItem>, StoreError> {
        Ok(self.inner.read().await.menu.clone())
    }

    async fn get_menu_item(&self, id: Uuid) -> Result<Option<MenuItem>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .menu
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn insert_menu_item(&self, new: NewMenuItem) -> Result<MenuItem, StoreError> {
        let item = MenuItem::new(new);
        self.inner.write().await.menu.push(item.clone());
        Ok(item)
    }

    async fn update_menu_item(&self, id: Uuid, new: NewMenuItem) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.menu.iter_mut().find(|m| m.id == id) {
            Some(item) => {
                item.name = new.name;
                item.category = new.category;
                item.price = new.price;
                item.img = new.img;
                item.short_desc = new.short_desc;
                item.description = new.description;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_menu_item(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.menu.len();
        inner.menu.retain(|m| m.id != id);
        Ok((before - inner.menu.len()) as u64)
    }

    async fn insert_cart_item(&self, new: NewCartItem) -> Result<CartItem, StoreError> {
        let item = CartItem::new(new);
        self.inner.write().await.carts.push(item.clone());
        Ok(item)
    }

    async fn list_cart_items(&self, email: &str) -> Result<Vec<CartItem>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .carts
            .iter()
            .filter(|c| c.email == email)
            .cloned()
            .collect())
    }

    async fn delete_cart_item(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.carts.len();
        inner.carts.retain(|c| c.id != id);
        Ok((before - inner.carts.len()) as u64)
    }

    async fn insert_booking(&self, new: NewBooking) -> Result<Booking, StoreError> {
        let booking = Booking::new(new);
        self.inner.write().await.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn list_bookings(&self, email: &str) -> Result<Vec<Booking>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .bookings
            .iter()
            .filter(|b| b.email == email)
            .cloned()
            .collect())
    }

    async fn delete_booking(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.bookings.len();
        inner.bookings.retain(|b| b.id != id);
        Ok((before - inner.bookings.len()) as u64)
    }

    async fn insert_review(&self, new: NewReview) -> Result<Review, StoreError> {
        let review = Review::new(new);
        self.inner.write().await.reviews.push(review.clone());
        Ok(review)
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, StoreError> {
        Ok(self.inner.read().await.reviews.clone())
    }

    async fn record_payment(&self, new: NewPayment) -> Result<PaymentReceipt, StoreError> {
        let payment = Payment::new(new);
        let mut inner = self.inner.write().await;
        let cart_ids = payment.cart_ids.clone();
        let payment_id = payment.id;
        inner.payments.push(payment);
        let before = inner.carts.len();
        inner.carts.retain(|c| !cart_ids.contains(&c.id));
        Ok(PaymentReceipt {
            payment_id,
            carts_removed: (before - inner.carts.len()) as u64,
        })
    }

    async fn list_payments(&self, email: &str) -> Result<Vec<Payment>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .payments
            .iter()
            .filter(|p| p.email == email)
            .cloned()
            .collect())
    }

    async fn admin_stats(&self) -> Result<AdminStats, StoreError> {
        let inner = self.inner.read().await;
        Ok(AdminStats {
            users: inner.users.len() as i64,
            cart_items: inner.carts.len() as i64,
            revenue: inner.payments.iter().map(|p| p.price).sum(),
        })
    }

    async fn order_stats(&self) -> Result<Vec<CategoryStat>, StoreError> {
        let inner = self.inner.read().await;
        let mut by_category: HashMap<String, (i64, f64)> = HashMap::new();

        for payment in &inner.payments {
            for menu_id in &payment.menu_ids {
                // A reference to a deleted menu item silently drops out
                if let Some(item) = inner.menu.iter().find(|m| m.id == *menu_id) {
                    let entry = by_category.entry(item.category.clone()).or_default();
                    entry.0 += 1;
                    entry.1 += item.price;
                }
            }
        }

        let mut stats: Vec<CategoryStat> = by_category
            .into_iter()
            .map(|(category, (count, revenue))| CategoryStat {
                category,
                count,
                revenue,
            })
            .collect();
        stats.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
        Ok(stats)
    }
}
