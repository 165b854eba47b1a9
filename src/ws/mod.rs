use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::app::AppState;

/// Shared registry of open WebSocket connections. Registration,
/// deregistration, and broadcast iteration may run concurrently from any
/// connection task; a sender whose connection has gone away is skipped and
/// pruned during broadcast rather than failing the loop.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    connections: Arc<RwLock<HashMap<Uuid, mpsc::UnboundedSender<Message>>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection; the receiver half feeds the connection's send task.
    pub async fn register(&self) -> (Uuid, mpsc::UnboundedReceiver<Message>) {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();
        self.connections.write().await.insert(id, tx);
        debug!("WebSocket client {} connected", id);
        (id, rx)
    }

    pub async fn deregister(&self, id: Uuid) {
        self.connections.write().await.remove(&id);
        debug!("WebSocket client {} disconnected", id);
    }

    /// Fire-and-forget delivery to every registered connection. The unbounded
    /// channel means a slow client never blocks the broadcast; a closed
    /// channel means the client is gone and its entry is dropped. Returns the
    /// number of connections the message was handed to.
    pub async fn broadcast(&self, text: &str) -> usize {
        let mut connections = self.connections.write().await;
        let before = connections.len();
        connections.retain(|_, tx| tx.send(Message::Text(text.to_string())).is_ok());
        let delivered = connections.len();
        if delivered < before {
            debug!("Pruned {} closed WebSocket connections", before - delivered);
        }
        delivered
    }

    pub async fn len(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Drop every registered sender, ending each connection's send task.
    /// Used during graceful shutdown.
    pub async fn drain(&self) {
        self.connections.write().await.clear();
    }
}

/// GET /ws - upgrade to the echo/broadcast channel
pub async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state.registry))
}

async fn handle_socket(socket: WebSocket, registry: ConnectionRegistry) {
    let (id, mut rx) = registry.register().await;
    let (mut sink, mut stream) = socket.split();

    // Outbound half: forward broadcasts queued for this connection
    let send_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            if sink.send(message).await.is_err() {
                break;
            }
        }
    });

    // Inbound half: any text frame is echoed to every open connection
    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => {
                registry.broadcast(&format!("Echo: {}", text)).await;
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("WebSocket receive error for client {}: {}", id, e);
                break;
            }
        }
    }

    send_task.abort();
    registry.deregister(id).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn broadcast_reaches_every_registered_connection() {
        let registry = ConnectionRegistry::new();
        let (_id1, mut rx1) = registry.register().await;
        let (_id2, mut rx2) = registry.register().await;
        let (_id3, mut rx3) = registry.register().await;

        let delivered = registry.broadcast("Echo: hello").await;
        assert_eq!(delivered, 3);

        for rx in [&mut rx1, &mut rx2, &mut rx3] {
            match rx.recv().await {
                Some(Message::Text(text)) => assert_eq!(text, "Echo: hello"),
                other => panic!("unexpected message: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn closed_connections_are_pruned_during_broadcast() {
        let registry = ConnectionRegistry::new();
        let (_id1, mut rx1) = registry.register().await;
        let (_id2, rx2) = registry.register().await;

        // Dropping the receiver closes the channel, as a disconnect would
        drop(rx2);

        let delivered = registry.broadcast("Echo: still here").await;
        assert_eq!(delivered, 1);
        assert_eq!(registry.len().await, 1);

        match rx1.recv().await {
            Some(Message::Text(text)) => assert_eq!(text, "Echo: still here"),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn deregister_removes_connection() {
        let registry = ConnectionRegistry::new();
        let (id, _rx) = registry.register().await;
        assert_eq!(registry.len().await, 1);
        registry.deregister(id).await;
        assert_eq!(registry.len().await, 0);
    }

    #[tokio::test]
    async fn drain_clears_registry() {
        let registry = ConnectionRegistry::new();
        let (_a, _rx_a) = registry.register().await;
        let (_b, _rx_b) = registry.register().await;
        registry.drain().await;
        assert_eq!(registry.len().await, 0);
    }
}
