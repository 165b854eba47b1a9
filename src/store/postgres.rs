use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{
    Booking, CartItem, MenuItem, NewBooking, NewCartItem, NewMenuItem, NewPayment, NewReview,
    NewUser, Payment, PaymentReceipt, Review, User,
};

use super::{AdminStats, CategoryStat, Store, StoreError};

/// Production store backed by Postgres. One table per collection; records are
/// constructed in process (id and created_at included) and inserted whole.
pub struct PostgresStore {
    pool: PgPool,
}

const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        role TEXT,
        created_at TIMESTAMPTZ NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS menu_items (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL,
        img TEXT,
        short_desc TEXT,
        description TEXT,
        created_at TIMESTAMPTZ NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS cart_items (
        id UUID PRIMARY KEY,
        email TEXT NOT NULL,
        menu_item_id UUID NOT NULL,
        name TEXT NOT NULL,
        img TEXT,
        price DOUBLE PRECISION NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS bookings (
        id UUID PRIMARY KEY,
        email TEXT NOT NULL,
        name TEXT NOT NULL,
        phone TEXT,
        date TEXT NOT NULL,
        time TEXT NOT NULL,
        guests INTEGER NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS payments (
        id UUID PRIMARY KEY,
        email TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL,
        transaction_id TEXT NOT NULL,
        status TEXT NOT NULL,
        cart_ids UUID[] NOT NULL,
        menu_ids UUID[] NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS reviews (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        details TEXT NOT NULL,
        rating DOUBLE PRECISION NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )"#,
];

impl PostgresStore {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        info!("Connected to Postgres store");
        Ok(Self { pool })
    }

    /// Create collection tables when absent. Runs once at startup.
    pub async fn init(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed Postgres store pool");
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert_user(&self, new: NewUser) -> Result<User, StoreError> {
        let user = User::new(new);
        sqlx::query("INSERT INTO users (id, email, role, created_at) VALUES ($1, $2, $3, $4)")
            .bind(user.id)
            .bind(&user.email)
            .bind(&user.role)
            .bind(user.created_at)
            .execute(&self.pool)
            .await?;
        Ok(user)
    }

    async fn promote_user(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE users SET role = 'admin' WHERE id = $1 AND (role IS NULL OR role <> 'admin')",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_user(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_menu(&self) -> Result<Vec<MenuItem>, StoreError> {
        let items = sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn get_menu_item(&self, id: Uuid) -> Result<Option<MenuItem>, StoreError> {
        let item = sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    async fn insert_menu_item(&self, new: NewMenuItem) -> Result<MenuItem, StoreError> {
        let item = MenuItem::new(new);
        sqlx::query(
            r#"INSERT INTO menu_items
               (id, name, category, price, img, short_desc, description, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.price)
        .bind(&item.img)
        .bind(&item.short_desc)
        .bind(&item.description)
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;
        Ok(item)
    }

    async fn update_menu_item(&self, id: Uuid, new: NewMenuItem) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"UPDATE menu_items
               SET name = $2, category = $3, price = $4, img = $5,
                   short_desc = $6, description = $7
               WHERE id = $1"#,
        )
        .bind(id)
        .bind(&new.name)
        .bind(&new.category)
        .bind(new.price)
        .bind(&new.img)
        .bind(&new.short_desc)
        .bind(&new.description)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_menu_item(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn insert_cart_item(&self, new: NewCartItem) -> Result<CartItem, StoreError> {
        let item = CartItem::new(new);
        sqlx::query(
            r#"INSERT INTO cart_items
               (id, email, menu_item_id, name, img, price, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(item.id)
        .bind(&item.email)
        .bind(item.menu_item_id)
        .bind(&item.name)
        .bind(&item.img)
        .bind(item.price)
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;
        Ok(item)
    }

    async fn list_cart_items(&self, email: &str) -> Result<Vec<CartItem>, StoreError> {
        let items = sqlx::query_as::<_, CartItem>(
            "SELECT * FROM cart_items WHERE email = $1 ORDER BY created_at",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn delete_cart_item(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn insert_booking(&self, new: NewBooking) -> Result<Booking, StoreError> {
        let booking = Booking::new(new);
        sqlx::query(
            r#"INSERT INTO bookings
               (id, email, name, phone, date, time, guests, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(booking.id)
        .bind(&booking.email)
        .bind(&booking.name)
        .bind(&booking.phone)
        .bind(&booking.date)
        .bind(&booking.time)
        .bind(booking.guests)
        .bind(booking.created_at)
        .execute(&self.pool)
        .await?;
        Ok(booking)
    }

    async fn list_bookings(&self, email: &str) -> Result<Vec<Booking>, StoreError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE email = $1 ORDER BY created_at",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    async fn delete_booking(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn insert_review(&self, new: NewReview) -> Result<Review, StoreError> {
        let review = Review::new(new);
        sqlx::query(
            "INSERT INTO reviews (id, name, details, rating, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(review.id)
        .bind(&review.name)
        .bind(&review.details)
        .bind(review.rating)
        .bind(review.created_at)
        .execute(&self.pool)
        .await?;
        Ok(review)
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, StoreError> {
        let reviews = sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(reviews)
    }

    async fn record_payment(&self, new: NewPayment) -> Result<PaymentReceipt, StoreError> {
        let payment = Payment::new(new);

        // Two sequential operations, deliberately not wrapped in a
        // transaction: the contract permits an implementation to make this
        // atomic, and this one currently does not.
        sqlx::query(
            r#"INSERT INTO payments
               (id, email, price, transaction_id, status, cart_ids, menu_ids, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(payment.id)
        .bind(&payment.email)
        .bind(payment.price)
        .bind(&payment.transaction_id)
        .bind(&payment.status)
        .bind(&payment.cart_ids)
        .bind(&payment.menu_ids)
        .bind(payment.created_at)
        .execute(&self.pool)
        .await?;

        let result = sqlx::query("DELETE FROM cart_items WHERE id = ANY($1)")
            .bind(&payment.cart_ids)
            .execute(&self.pool)
            .await?;

        Ok(PaymentReceipt {
            payment_id: payment.id,
            carts_removed: result.rows_affected(),
        })
    }

    async fn list_payments(&self, email: &str) -> Result<Vec<Payment>, StoreError> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE email = $1 ORDER BY created_at",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(payments)
    }

    async fn admin_stats(&self) -> Result<AdminStats, StoreError> {
        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        let cart_items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart_items")
            .fetch_one(&self.pool)
            .await?;
        let revenue: f64 = sqlx::query_scalar("SELECT COALESCE(SUM(price), 0) FROM payments")
            .fetch_one(&self.pool)
            .await?;

        Ok(AdminStats {
            users,
            cart_items,
            revenue,
        })
    }

    async fn order_stats(&self) -> Result<Vec<CategoryStat>, StoreError> {
        // Inner join: payment references to deleted menu items drop out
        let stats = sqlx::query_as::<_, CategoryStat>(
            r#"SELECT m.category AS category,
                      COUNT(*) AS count,
                      SUM(m.price) AS revenue
               FROM payments p
               CROSS JOIN LATERAL UNNEST(p.menu_ids) AS menu_ref(id)
               JOIN menu_items m ON m.id = menu_ref.id
               GROUP BY m.category
               ORDER BY revenue DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stats)
    }
}
