//! Shared utilities for the mise recipe broadcast application.
//!
//! Provides logging setup and time helpers used by both the server and the
//! CLI client.

pub mod logger;
pub mod time;
