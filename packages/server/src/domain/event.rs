//! Recipe domain events.

use super::entity::Recipe;
use super::value_object::RecipeId;

/// An immutable notification describing a completed mutation to a recipe.
///
/// Events are ephemeral: they are not persisted and are never replayed to
/// late joiners. The authoritative mutation has already succeeded against
/// the persistence collaborator before an event is published, so delivery
/// is a pure notification.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeEvent {
    /// A recipe was created.
    Added(Recipe),
    /// An existing recipe was modified; carries the full new snapshot.
    Updated(Recipe),
    /// A recipe was removed.
    Deleted(RecipeId),
}

impl RecipeEvent {
    /// The identifier of the recipe this event refers to.
    pub fn recipe_id(&self) -> &RecipeId {
        match self {
            RecipeEvent::Added(recipe) | RecipeEvent::Updated(recipe) => &recipe.id,
            RecipeEvent::Deleted(id) => id,
        }
    }

    /// Short event name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RecipeEvent::Added(_) => "recipe_added",
            RecipeEvent::Updated(_) => "recipe_updated",
            RecipeEvent::Deleted(_) => "recipe_deleted",
        }
    }
}
