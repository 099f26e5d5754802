//! UI layer: axum router, HTTP and WebSocket handlers.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
