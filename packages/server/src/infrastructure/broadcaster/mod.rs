//! EventBroadcaster implementations.
//!
//! - `websocket`: fan-out over per-connection WebSocket delivery channels

pub mod websocket;

pub use websocket::WebSocketBroadcaster;
