//! Conversion logic between DTOs and domain types.
//!
//! DTO to domain conversion is the malformed-event boundary: payloads that
//! fail recipe validation are rejected here with a `ValidationError` and
//! dropped by the caller instead of being applied to any view.

use crate::domain::{Recipe, RecipeEvent, RecipeId, Timestamp, UserId, ValidationError};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// DTO -> Domain
// ========================================

impl TryFrom<dto::RecipeDto> for Recipe {
    type Error = ValidationError;

    fn try_from(dto: dto::RecipeDto) -> Result<Self, Self::Error> {
        Recipe::new(
            RecipeId::new(dto.id)?,
            dto.title,
            dto.ingredients,
            dto.preparation_steps,
            dto.cooking_time,
            dto.category,
            dto.image,
            UserId::new(dto.user_id)?,
            Timestamp::new(dto.created_at),
            Timestamp::new(dto.updated_at),
        )
    }
}

impl TryFrom<dto::ServerMessage> for RecipeEvent {
    type Error = ValidationError;

    fn try_from(message: dto::ServerMessage) -> Result<Self, Self::Error> {
        match message {
            dto::ServerMessage::RecipeAdded { recipe } => {
                Ok(RecipeEvent::Added(recipe.try_into()?))
            }
            dto::ServerMessage::RecipeUpdated { recipe } => {
                Ok(RecipeEvent::Updated(recipe.try_into()?))
            }
            dto::ServerMessage::RecipeDeleted { recipe_id } => {
                Ok(RecipeEvent::Deleted(RecipeId::new(recipe_id)?))
            }
        }
    }
}

// ========================================
// Domain -> DTO
// ========================================

impl From<Recipe> for dto::RecipeDto {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.into_string(),
            title: recipe.title,
            ingredients: recipe.ingredients,
            preparation_steps: recipe.preparation_steps,
            cooking_time: recipe.cooking_time,
            category: recipe.category,
            image: recipe.image,
            user_id: recipe.user_id.into_string(),
            created_at: recipe.created_at.value(),
            updated_at: recipe.updated_at.value(),
        }
    }
}

impl From<RecipeEvent> for dto::ServerMessage {
    fn from(event: RecipeEvent) -> Self {
        match event {
            RecipeEvent::Added(recipe) => dto::ServerMessage::RecipeAdded {
                recipe: recipe.into(),
            },
            RecipeEvent::Updated(recipe) => dto::ServerMessage::RecipeUpdated {
                recipe: recipe.into(),
            },
            RecipeEvent::Deleted(id) => dto::ServerMessage::RecipeDeleted {
                recipe_id: id.into_string(),
            },
        }
    }
}
