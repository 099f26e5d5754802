//! EventBroadcaster trait definition.
//!
//! The domain layer defines the interface it needs for connection
//! registration and event fan-out; the infrastructure layer provides the
//! WebSocket-backed implementation (dependency inversion, same shape as the
//! repository/pusher split).

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::error::BroadcastError;
use super::event::RecipeEvent;
use super::value_object::{ClientId, ConnectionToken, Timestamp};

/// Outbound channel of one connection. Messages queued here are drained by
/// the connection's writer task and pushed over its WebSocket.
pub type DeliveryChannel = mpsc::UnboundedSender<String>;

/// Snapshot of one registered connection, for introspection.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub token: ConnectionToken,
    /// Logical identity, present once the client has sent `join`.
    pub client_id: Option<ClientId>,
    pub connected_at: Timestamp,
}

/// Connection registration and best-effort event fan-out.
///
/// `publish` delivers an event to every connection registered at the moment
/// of publish: at-most-once, no acknowledgement, no retry. A delivery
/// failure on one connection never aborts delivery to the rest.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventBroadcaster: Send + Sync {
    /// Register a connection's delivery channel. Returns a token unique to
    /// this registration.
    async fn register_connection(&self, channel: DeliveryChannel) -> ConnectionToken;

    /// Record the logical identity of a connection. Identity does not scope
    /// fan-out.
    async fn identify_connection(&self, token: ConnectionToken, client_id: ClientId);

    /// Remove a connection. Idempotent: unregistering an absent token is a
    /// no-op.
    async fn unregister_connection(&self, token: ConnectionToken);

    /// Fan an event out to all currently registered connections. Returns the
    /// number of delivery attempts made.
    async fn publish(&self, event: RecipeEvent) -> Result<usize, BroadcastError>;

    /// List currently registered connections.
    async fn connections(&self) -> Vec<ConnectionInfo>;
}
