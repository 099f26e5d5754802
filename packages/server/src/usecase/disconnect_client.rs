//! UseCase: client disconnection.
//!
//! Unregisters a connection when its transport closes. The operation is
//! idempotent: concurrent close signals (read task and write task ending at
//! the same time, or a reconnecting client's old socket) may unregister the
//! same token twice, and the second call is a no-op.

use std::sync::Arc;

use crate::domain::{ConnectionToken, EventBroadcaster};

/// Connection teardown.
pub struct DisconnectClientUseCase {
    broadcaster: Arc<dyn EventBroadcaster>,
}

impl DisconnectClientUseCase {
    pub fn new(broadcaster: Arc<dyn EventBroadcaster>) -> Self {
        Self { broadcaster }
    }

    /// Remove the connection from the registry. Idempotent.
    pub async fn execute(&self, token: ConnectionToken) {
        self.broadcaster.unregister_connection(token).await;
        tracing::info!("connection {} disconnected", token);
    }
}
