//! Infrastructure layer: connection registry, WebSocket broadcaster, DTOs.

pub mod broadcaster;
pub mod dto;
pub mod registry;

pub use broadcaster::WebSocketBroadcaster;
pub use registry::ConnectionRegistry;
