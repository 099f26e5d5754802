//! UseCase: connection listing.

use std::sync::Arc;

use crate::domain::{ConnectionInfo, EventBroadcaster};

/// Read-only view of current registry membership, for the HTTP surface.
pub struct GetConnectionsUseCase {
    broadcaster: Arc<dyn EventBroadcaster>,
}

impl GetConnectionsUseCase {
    pub fn new(broadcaster: Arc<dyn EventBroadcaster>) -> Self {
        Self { broadcaster }
    }

    /// List currently registered connections.
    pub async fn execute(&self) -> Vec<ConnectionInfo> {
        self.broadcaster.connections().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClientId;
    use crate::infrastructure::{ConnectionRegistry, WebSocketBroadcaster};
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_execute_lists_registered_connections() {
        // given:
        let registry = Arc::new(ConnectionRegistry::new());
        let broadcaster = Arc::new(WebSocketBroadcaster::new(registry.clone()));
        let usecase = GetConnectionsUseCase::new(broadcaster);
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();
        let token = registry.register(tx1).await;
        registry.register(tx2).await;
        registry
            .identify(token, ClientId::new("alice".to_string()).unwrap())
            .await;

        // when:
        let infos = usecase.execute().await;

        // then:
        assert_eq!(infos.len(), 2);
        assert!(
            infos
                .iter()
                .any(|info| info.client_id == Some(ClientId::new("alice".to_string()).unwrap()))
        );
    }

    #[tokio::test]
    async fn test_execute_with_no_connections_returns_empty_list() {
        // given:
        let registry = Arc::new(ConnectionRegistry::new());
        let broadcaster = Arc::new(WebSocketBroadcaster::new(registry));
        let usecase = GetConnectionsUseCase::new(broadcaster);

        // when:
        let infos = usecase.execute().await;

        // then:
        assert!(infos.is_empty());
    }
}
