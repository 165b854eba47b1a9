use std::sync::Arc;

use table_talk_api::app::{app, AppState};
use table_talk_api::config;
use table_talk_api::payments::{MockProcessor, PaymentProcessor, StripeProcessor};
use table_talk_api::store::{MemoryStore, PostgresStore, Store};
use table_talk_api::ws::ConnectionRegistry;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Table Talk API in {:?} mode", config.environment);

    let store: Arc<dyn Store> = match &config.database.url {
        Some(url) => {
            let store = PostgresStore::connect(url, config.database.max_connections)
                .await
                .unwrap_or_else(|e| panic!("failed to connect to store: {}", e));
            store
                .init()
                .await
                .unwrap_or_else(|e| panic!("failed to initialize store schema: {}", e));
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory store (development only)");
            Arc::new(MemoryStore::new())
        }
    };

    let payments: Arc<dyn PaymentProcessor> = match &config.payments.stripe_secret_key {
        Some(key) => Arc::new(StripeProcessor::new(
            key.clone(),
            config.payments.currency.clone(),
        )),
        None => {
            tracing::warn!("STRIPE_SECRET_KEY not set; using mock payment processor");
            Arc::new(MockProcessor)
        }
    };

    let registry = ConnectionRegistry::new();
    let state = AppState {
        store,
        payments,
        registry: registry.clone(),
    };

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Table Talk is running on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal(registry))
        .await
        .expect("server");
}

async fn shutdown_signal(registry: ConnectionRegistry) {
    if tokio::signal::ctrl_c().await.is_err() {
        return;
    }

    let open = registry.len().await;
    tracing::info!("Shutdown signal received; draining {} WebSocket connections", open);
    registry.drain().await;
}
