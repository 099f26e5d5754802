//! WebSocket message DTOs.
//!
//! One JSON message per WebSocket text frame, dispatched on the `type`
//! field. Client-to-server messages are the publish triggers; server-to-
//! client messages are the delivery channels. The tag spellings are the
//! original application's socket event names.

use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// Full recipe snapshot as carried on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDto {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub preparation_steps: Vec<String>,
    /// Minutes.
    pub cooking_time: u32,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub user_id: String,
    /// Unix milliseconds, UTC.
    pub created_at: i64,
    pub updated_at: i64,
}

/// Messages a client sends to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Announce logical identity. Does not scope fan-out.
    Join { client_id: String },
    /// Publish: a recipe was created.
    NewRecipe { recipe: RecipeDto },
    /// Publish: a recipe was updated.
    UpdateRecipe { recipe: RecipeDto },
    /// Publish: a recipe was deleted.
    DeleteRecipe { recipe_id: String },
}

/// Messages the server fans out to every connected client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    RecipeAdded { recipe: RecipeDto },
    RecipeUpdated { recipe: RecipeDto },
    RecipeDeleted { recipe_id: String },
}
