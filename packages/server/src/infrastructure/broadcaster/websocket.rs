//! WebSocket-backed EventBroadcaster implementation.
//!
//! Socket creation stays in the UI layer (`ui/handler/websocket.rs`); this
//! implementation only manages registered delivery channels and fans events
//! out to them. The event is encoded once, membership is snapshotted under
//! the registry lock, and the sends happen outside it, so one slow or dead
//! connection never blocks the others.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    BroadcastError, ClientId, ConnectionInfo, ConnectionToken, DeliveryChannel, EventBroadcaster,
    RecipeEvent,
};
use crate::infrastructure::dto::websocket::ServerMessage;
use crate::infrastructure::registry::ConnectionRegistry;

/// Fan-out over per-connection unbounded channels.
pub struct WebSocketBroadcaster {
    registry: Arc<ConnectionRegistry>,
}

impl WebSocketBroadcaster {
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl EventBroadcaster for WebSocketBroadcaster {
    async fn register_connection(&self, channel: DeliveryChannel) -> ConnectionToken {
        self.registry.register(channel).await
    }

    async fn identify_connection(&self, token: ConnectionToken, client_id: ClientId) {
        self.registry.identify(token, client_id).await;
    }

    async fn unregister_connection(&self, token: ConnectionToken) {
        self.registry.unregister(token).await;
    }

    async fn publish(&self, event: RecipeEvent) -> Result<usize, BroadcastError> {
        let kind = event.kind();
        let message = ServerMessage::from(event);
        let json =
            serde_json::to_string(&message).map_err(|e| BroadcastError::Encode(e.to_string()))?;

        let targets = self.registry.snapshot().await;
        let mut attempts = 0;
        for (token, channel) in targets {
            attempts += 1;
            // A failed send means the connection closed after the snapshot;
            // delivery to the remaining targets continues.
            if channel.send(json.clone()).is_err() {
                tracing::warn!(
                    "failed to deliver {} to connection {}: channel closed",
                    kind,
                    token
                );
            }
        }

        tracing::debug!("published {} to {} connections", kind, attempts);
        Ok(attempts)
    }

    async fn connections(&self) -> Vec<ConnectionInfo> {
        self.registry.infos().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Recipe, RecipeId, Timestamp, UserId};
    use tokio::sync::mpsc;

    fn sample_event() -> RecipeEvent {
        RecipeEvent::Added(
            Recipe::new(
                RecipeId::new("r1".to_string()).unwrap(),
                "Tomato Soup".to_string(),
                vec!["tomato".to_string()],
                vec!["boil".to_string()],
                25,
                Category::Dinner,
                None,
                UserId::new("u1".to_string()).unwrap(),
                Timestamp::new(1000),
                Timestamp::new(1000),
            )
            .unwrap(),
        )
    }

    fn create_test_broadcaster() -> (WebSocketBroadcaster, Arc<ConnectionRegistry>) {
        let registry = Arc::new(ConnectionRegistry::new());
        let broadcaster = WebSocketBroadcaster::new(registry.clone());
        (broadcaster, registry)
    }

    #[tokio::test]
    async fn test_publish_reaches_every_registered_connection() {
        // given:
        let (broadcaster, _registry) = create_test_broadcaster();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        broadcaster.register_connection(tx1).await;
        broadcaster.register_connection(tx2).await;

        // when:
        let attempts = broadcaster.publish(sample_event()).await.unwrap();

        // then: one delivery attempt per connection, both delivered
        assert_eq!(attempts, 2);
        let first = rx1.recv().await.unwrap();
        let second = rx2.recv().await.unwrap();
        assert!(first.contains("\"type\":\"recipe_added\""));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_publish_with_no_connections_makes_no_attempts() {
        // given:
        let (broadcaster, _registry) = create_test_broadcaster();

        // when:
        let attempts = broadcaster.publish(sample_event()).await.unwrap();

        // then:
        assert_eq!(attempts, 0);
    }

    #[tokio::test]
    async fn test_dead_connection_does_not_block_the_rest() {
        // given: three connections, the middle one already dropped its
        // receiver
        let (broadcaster, _registry) = create_test_broadcaster();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, rx2) = mpsc::unbounded_channel();
        let (tx3, mut rx3) = mpsc::unbounded_channel();
        broadcaster.register_connection(tx1).await;
        broadcaster.register_connection(tx2).await;
        broadcaster.register_connection(tx3).await;
        drop(rx2);

        // when:
        let attempts = broadcaster.publish(sample_event()).await.unwrap();

        // then: all three were attempted, the live two received
        assert_eq!(attempts, 3);
        assert!(rx1.recv().await.is_some());
        assert!(rx3.recv().await.is_some());
    }

    #[tokio::test]
    async fn test_publish_skips_unregistered_connection() {
        // given:
        let (broadcaster, _registry) = create_test_broadcaster();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        broadcaster.register_connection(tx1).await;
        let token = broadcaster.register_connection(tx2).await;
        broadcaster.unregister_connection(token).await;

        // when:
        let attempts = broadcaster.publish(sample_event()).await.unwrap();

        // then:
        assert_eq!(attempts, 1);
        assert!(rx1.recv().await.is_some());
        assert!(rx2.try_recv().is_err());
    }
}
