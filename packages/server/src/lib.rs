//! Real-time recipe event broadcast server.
//!
//! Clients publish recipe mutation events over a persistent WebSocket
//! channel after the authoritative mutation has been committed elsewhere;
//! the server fans each event out to every connected client so their local
//! recipe lists stay approximately in sync without re-fetching.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
