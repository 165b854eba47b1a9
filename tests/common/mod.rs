// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use table_talk_api::app::{app, AppState};
use table_talk_api::models::NewUser;
use table_talk_api::payments::MockProcessor;
use table_talk_api::store::MemoryStore;
use table_talk_api::ws::ConnectionRegistry;

pub struct TestServer {
    pub base_url: String,
    pub state: AppState,
}

/// Start the real app on an ephemeral port with the in-memory store and the
/// mock payment processor. Each test spawns its own server so stores never
/// leak state across tests.
pub async fn spawn_server() -> Result<TestServer> {
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        payments: Arc::new(MockProcessor),
        registry: ConnectionRegistry::new(),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr()?;

    let router = app(state.clone());
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("test server error: {}", e);
        }
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        state,
    })
}

/// Obtain a session token through the public /jwt endpoint.
pub async fn issue_token(client: &reqwest::Client, base_url: &str, email: &str) -> Result<String> {
    let res = client
        .post(format!("{}/jwt", base_url))
        .json(&serde_json::json!({ "email": email }))
        .send()
        .await?;

    let body: serde_json::Value = res.json().await?;
    body["data"]["token"]
        .as_str()
        .map(str::to_string)
        .context("token missing from /jwt response")
}

/// Seed a user and grant the admin role directly through the store; the
/// first admin cannot be created over the API.
pub async fn seed_admin(server: &TestServer, email: &str) -> Result<()> {
    let user = server
        .state
        .store
        .insert_user(NewUser {
            email: email.to_string(),
        })
        .await?;
    server.state.store.promote_user(user.id).await?;
    Ok(())
}
