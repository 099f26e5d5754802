//! CLI client for the mise recipe broadcast server.
//!
//! Holds a client-local view of the recipe list and keeps it approximately
//! in sync by applying broadcast events; publishes the client's own
//! mutations over the same channel.

pub mod commands;
pub mod error;
pub mod formatter;
pub mod lifecycle;
pub mod runner;
pub mod session;
pub mod snapshot;
pub mod ui;
pub mod view;

pub use runner::run_client;
