//! Domain layer: recipe entities, events, and the broadcaster interface.

pub mod broadcaster;
pub mod entity;
pub mod error;
pub mod event;
pub mod value_object;

pub use broadcaster::{ConnectionInfo, DeliveryChannel, EventBroadcaster};
pub use entity::Recipe;
pub use error::{BroadcastError, ValidationError};
pub use event::RecipeEvent;
pub use value_object::{Category, ClientId, ConnectionToken, RecipeId, Timestamp, UserId};

#[cfg(test)]
pub use broadcaster::MockEventBroadcaster;
