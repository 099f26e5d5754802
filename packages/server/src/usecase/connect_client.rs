//! UseCase: client connection.
//!
//! Registers a connection's delivery channel when its transport opens and
//! records the logical identity announced by a later `join` message. The
//! registry's membership stays consistent with actually-open transports:
//! registration happens before the WebSocket upgrade completes, so the
//! first event published after the handshake already reaches the new
//! connection.

use std::sync::Arc;

use crate::domain::{ClientId, ConnectionToken, DeliveryChannel, EventBroadcaster};

/// Connection registration.
pub struct ConnectClientUseCase {
    broadcaster: Arc<dyn EventBroadcaster>,
}

impl ConnectClientUseCase {
    pub fn new(broadcaster: Arc<dyn EventBroadcaster>) -> Self {
        Self { broadcaster }
    }

    /// Register a new connection.
    ///
    /// # Arguments
    ///
    /// * `channel` - The connection's outbound delivery channel
    ///
    /// # Returns
    ///
    /// A token unique to this registration.
    pub async fn execute(&self, channel: DeliveryChannel) -> ConnectionToken {
        let token = self.broadcaster.register_connection(channel).await;
        tracing::info!("connection {} registered", token);
        token
    }

    /// Record the identity announced by a `join` message.
    ///
    /// Identity never scopes fan-out; all events go to all connections
    /// regardless of who joined.
    pub async fn identify(&self, token: ConnectionToken, client_id: ClientId) {
        tracing::info!("connection {} joined as '{}'", token, client_id);
        self.broadcaster.identify_connection(token, client_id).await;
    }
}
