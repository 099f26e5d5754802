//! Recipe entity.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::value_object::{Category, RecipeId, Timestamp, UserId};

/// A recipe snapshot as carried by events.
///
/// The source of truth for recipes lives in the external persistence
/// collaborator; this core only carries copies, so the entity has no
/// behavior beyond validated construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub preparation_steps: Vec<String>,
    /// Cooking time in minutes, always positive.
    pub cooking_time: u32,
    pub category: Category,
    /// Optional image URL.
    pub image: Option<String>,
    pub user_id: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Recipe {
    /// Create a validated recipe snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the title is empty, the ingredient
    /// or preparation step lists are empty or contain empty entries, or the
    /// cooking time is zero.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RecipeId,
        title: String,
        ingredients: Vec<String>,
        preparation_steps: Vec<String>,
        cooking_time: u32,
        category: Category,
        image: Option<String>,
        user_id: UserId,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if ingredients.is_empty() {
            return Err(ValidationError::NoIngredients);
        }
        if let Some(index) = ingredients.iter().position(|i| i.trim().is_empty()) {
            return Err(ValidationError::EmptyIngredient(index));
        }
        if preparation_steps.is_empty() {
            return Err(ValidationError::NoPreparationSteps);
        }
        if let Some(index) = preparation_steps.iter().position(|s| s.trim().is_empty()) {
            return Err(ValidationError::EmptyPreparationStep(index));
        }
        if cooking_time == 0 {
            return Err(ValidationError::InvalidCookingTime);
        }

        Ok(Self {
            id,
            title,
            ingredients,
            preparation_steps,
            cooking_time,
            category,
            image,
            user_id,
            created_at,
            updated_at,
        })
    }
}
