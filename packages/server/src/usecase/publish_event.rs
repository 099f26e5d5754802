//! UseCase: event publication.
//!
//! Accepts a validated domain event from a connected publisher and fans it
//! out to every registered connection, the publisher included. Delivery is
//! best-effort: the authoritative mutation already succeeded before publish
//! is invoked, so a lost notification only leaves that client's view stale
//! until its next full re-fetch.

use std::sync::Arc;

use crate::domain::{EventBroadcaster, RecipeEvent};

use super::error::PublishError;

/// Event fan-out.
pub struct PublishEventUseCase {
    broadcaster: Arc<dyn EventBroadcaster>,
}

impl PublishEventUseCase {
    pub fn new(broadcaster: Arc<dyn EventBroadcaster>) -> Self {
        Self { broadcaster }
    }

    /// Publish an event to all currently registered connections.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - the number of delivery attempts made
    /// * `Err(PublishError)` - the event could not be handed to the broadcaster
    pub async fn execute(&self, event: RecipeEvent) -> Result<usize, PublishError> {
        let kind = event.kind();
        let recipe_id = event.recipe_id().clone();

        let attempts = self
            .broadcaster
            .publish(event)
            .await
            .map_err(|e| PublishError::Broadcast(e.to_string()))?;

        tracing::info!(
            "{} for recipe '{}' fanned out to {} connections",
            kind,
            recipe_id,
            attempts
        );
        Ok(attempts)
    }
}
