//! Error types for the recipe broadcast domain.

use thiserror::Error;

/// Validation failures for recipe payloads and identifiers.
///
/// These mark malformed events: a payload failing validation is dropped at
/// the conversion boundary and never applied to any view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("recipe id must not be empty")]
    EmptyRecipeId,

    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("client id must not be empty")]
    EmptyClientId,

    #[error("recipe title must not be empty")]
    EmptyTitle,

    #[error("a recipe needs at least one ingredient")]
    NoIngredients,

    #[error("ingredient {0} is empty")]
    EmptyIngredient(usize),

    #[error("a recipe needs at least one preparation step")]
    NoPreparationSteps,

    #[error("preparation step {0} is empty")]
    EmptyPreparationStep(usize),

    #[error("cooking time must be a positive number of minutes")]
    InvalidCookingTime,

    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

/// Failure to publish an event.
///
/// Per-connection delivery failures are not errors; they are logged and the
/// remaining targets still receive the event. The only publish-level failure
/// is an event that cannot be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BroadcastError {
    #[error("failed to encode event: {0}")]
    Encode(String),
}
