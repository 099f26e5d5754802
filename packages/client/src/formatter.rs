//! Formatting of events and the local view for terminal display.

use mise_server::domain::{Recipe, RecipeEvent};
use mise_shared::time::timestamp_to_rfc3339;

use crate::view::ClientView;

pub struct MessageFormatter;

impl MessageFormatter {
    /// One-line summary of a recipe.
    pub fn format_recipe_line(recipe: &Recipe) -> String {
        let image = match &recipe.image {
            Some(url) => format!(" [{url}]"),
            None => String::new(),
        };
        format!(
            "{} | {} ({}, {} min, by {}){}",
            recipe.id.as_str(),
            recipe.title,
            recipe.category,
            recipe.cooking_time,
            recipe.user_id.as_str(),
            image
        )
    }

    /// Notification line for an inbound broadcast event.
    pub fn format_event_notice(event: &RecipeEvent) -> String {
        match event {
            RecipeEvent::Added(recipe) => {
                format!("\n+ added   {}\n", Self::format_recipe_line(recipe))
            }
            RecipeEvent::Updated(recipe) => {
                format!("\n~ updated {}\n", Self::format_recipe_line(recipe))
            }
            RecipeEvent::Deleted(id) => format!("\n- deleted {}\n", id.as_str()),
        }
    }

    /// The full view, newest first.
    pub fn format_view(view: &ClientView) -> String {
        if view.is_empty() {
            return "\n(no recipes yet)\n".to_string();
        }

        let mut output = format!("\n{} recipe(s):\n", view.len());
        for recipe in view.recipes() {
            output.push_str(&format!(
                "  {}  (updated {})\n",
                Self::format_recipe_line(recipe),
                timestamp_to_rfc3339(recipe.updated_at.value())
            ));
        }
        output
    }
}
