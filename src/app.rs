use std::sync::Arc;

use axum::extract::State;
use axum::routing::{delete, get, post};
use axum::Router;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{admin, protected, public};
use crate::payments::PaymentProcessor;
use crate::store::Store;
use crate::ws::{self, ConnectionRegistry};

/// Process-scoped collaborators handed to every handler: the system of
/// record, the payment processor, and the WebSocket connection registry.
/// All are initialized once at startup and shared by reference.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub payments: Arc<dyn PaymentProcessor>,
    pub registry: ConnectionRegistry,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // Token service
        .route("/jwt", post(public::auth::token_post))
        // Menu: public reads, admin mutations
        .route("/menu", get(public::menu::list).post(admin::menu::create))
        .route(
            "/menu/:id",
            get(public::menu::get)
                .patch(admin::menu::update)
                .delete(admin::menu::remove),
        )
        // Users: open registration, owner role lookup, admin management
        .route("/users", get(admin::users::list).post(public::users::register))
        .route(
            "/users/:id",
            get(protected::users::role_get)
                .patch(admin::users::promote)
                .delete(admin::users::remove),
        )
        // Carts
        .route(
            "/carts",
            get(protected::carts::list).post(protected::carts::create),
        )
        .route("/carts/:id", delete(protected::carts::remove))
        // Table bookings: open creation, authenticated management
        .route(
            "/bookings",
            get(protected::bookings::list).post(public::bookings::create),
        )
        .route("/bookings/:id", delete(protected::bookings::remove))
        // Reviews
        .route(
            "/reviews",
            get(public::reviews::list).post(public::reviews::create),
        )
        // Payments
        .route(
            "/create-payment-intent",
            post(protected::payments::create_intent),
        )
        .route("/payments", post(protected::payments::record))
        .route("/payments/:email", get(protected::payments::history))
        // Reporting
        .route("/admin-stats", get(admin::stats::admin_stats))
        .route("/order-stats", get(admin::stats::order_stats))
        // Broadcast channel
        .route("/ws", get(ws::ws_upgrade))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    "The Table Talk server is running"
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
