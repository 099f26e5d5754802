//! Snapshot fetching, decoupled from the delta subscription.
//!
//! The broadcast channel only carries deltas; the authoritative recipe list
//! lives in the persistence collaborator. Callers that want the view
//! repaired after a reconnect gap compose a [`SnapshotSource`] with the
//! runner; without one the view simply persists across the gap and missed
//! events stay missed, which matches the reference behavior.

use async_trait::async_trait;

use mise_server::domain::Recipe;

use crate::error::SnapshotError;

/// A source of authoritative recipe snapshots.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch the full current recipe list.
    async fn fetch_all(&self) -> Result<Vec<Recipe>, SnapshotError>;
}
