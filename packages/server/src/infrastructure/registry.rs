//! Connection registry.
//!
//! Tracks currently connected clients and their delivery channels. The
//! registry's membership mirrors actually-open transports: a connection is
//! inserted before its WebSocket upgrade completes and removed once its
//! socket tasks finish, so a dead connection never stays a broadcast target
//! after teardown.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::domain::{ClientId, ConnectionInfo, ConnectionToken, DeliveryChannel, Timestamp};

/// State held for one registered connection.
pub struct RegisteredConnection {
    /// Channel drained by the connection's writer task.
    pub channel: DeliveryChannel,
    /// Logical identity, set once the client sends `join`.
    pub client_id: Option<ClientId>,
    /// When the connection registered.
    pub connected_at: Timestamp,
}

/// The live set of connections eligible to receive broadcasts.
///
/// Guarded by a mutex; fan-out takes a membership snapshot under the lock
/// and iterates outside it, so concurrent `register`/`unregister` calls are
/// safe against mutation-during-iteration. An entry removed between the
/// snapshot and the send simply fails its send and is skipped.
pub struct ConnectionRegistry {
    connections: Mutex<HashMap<ConnectionToken, RegisteredConnection>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(HashMap::new()),
        }
    }

    /// Register a connection and return its unique token.
    pub async fn register(&self, channel: DeliveryChannel) -> ConnectionToken {
        let token = ConnectionToken::generate();
        let connection = RegisteredConnection {
            channel,
            client_id: None,
            connected_at: Timestamp::now(),
        };

        let mut connections = self.connections.lock().await;
        connections.insert(token, connection);
        tracing::debug!("connection {} registered", token);
        token
    }

    /// Record the logical identity of a connection. No-op when the token is
    /// no longer registered.
    pub async fn identify(&self, token: ConnectionToken, client_id: ClientId) {
        let mut connections = self.connections.lock().await;
        if let Some(connection) = connections.get_mut(&token) {
            tracing::debug!("connection {} identified as '{}'", token, client_id);
            connection.client_id = Some(client_id);
        }
    }

    /// Remove a connection. Idempotent: removing an absent token is a no-op.
    pub async fn unregister(&self, token: ConnectionToken) {
        let mut connections = self.connections.lock().await;
        if connections.remove(&token).is_some() {
            tracing::debug!("connection {} unregistered", token);
        }
    }

    /// Consistent snapshot of current membership, for fan-out outside the
    /// lock.
    pub async fn snapshot(&self) -> Vec<(ConnectionToken, DeliveryChannel)> {
        let connections = self.connections.lock().await;
        connections
            .iter()
            .map(|(token, connection)| (*token, connection.channel.clone()))
            .collect()
    }

    /// Snapshot of current membership with identity, for introspection.
    pub async fn infos(&self) -> Vec<ConnectionInfo> {
        let connections = self.connections.lock().await;
        let mut infos: Vec<ConnectionInfo> = connections
            .iter()
            .map(|(token, connection)| ConnectionInfo {
                token: *token,
                client_id: connection.client_id.clone(),
                connected_at: connection.connected_at,
            })
            .collect();

        // Sort by connect time for consistent ordering
        infos.sort_by_key(|info| info.connected_at);
        infos
    }

    /// Number of currently registered connections.
    pub async fn len(&self) -> usize {
        self.connections.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.connections.lock().await.is_empty()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
