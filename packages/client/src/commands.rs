//! CLI command parsing.
//!
//! Pipe-separated recipe fields keep the grammar forgiving for ingredient
//! and step lists that contain spaces:
//!
//! ```not_rust
//! add Tomato Soup | tomato, salt | chop; boil | 25 | Dinner
//! update r1 | Tomato Soup | tomato, salt, basil | chop; boil | 30 | Dinner
//! delete r1
//! list
//! quit
//! ```

use std::str::FromStr;

use mise_server::domain::Category;

use crate::error::CommandError;

/// Recipe fields as typed at the prompt, before an identifier and
/// timestamps are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub preparation_steps: Vec<String>,
    pub cooking_time: u32,
    pub category: Category,
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the current view.
    List,
    /// Publish a new recipe.
    Add(RecipeDraft),
    /// Publish an update to an existing recipe.
    Update { recipe_id: String, draft: RecipeDraft },
    /// Publish a deletion.
    Delete { recipe_id: String },
    /// Print usage.
    Help,
    /// End the session.
    Quit,
}

/// Parse one input line into a command.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "add" => Ok(Command::Add(parse_draft("add", rest)?)),
        "update" => {
            let (recipe_id, fields) = rest
                .split_once('|')
                .ok_or(CommandError::WrongFieldCount("update <id>"))?;
            let recipe_id = recipe_id.trim();
            if recipe_id.is_empty() {
                return Err(CommandError::MissingRecipeId);
            }
            Ok(Command::Update {
                recipe_id: recipe_id.to_string(),
                draft: parse_draft("update <id>", fields)?,
            })
        }
        "delete" => {
            if rest.is_empty() {
                return Err(CommandError::MissingRecipeId);
            }
            Ok(Command::Delete {
                recipe_id: rest.to_string(),
            })
        }
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Parse `<title> | <ingredients,...> | <steps;...> | <minutes> | <category>`.
fn parse_draft(keyword: &'static str, fields: &str) -> Result<RecipeDraft, CommandError> {
    let parts: Vec<&str> = fields.split('|').map(str::trim).collect();
    if parts.len() != 5 {
        return Err(CommandError::WrongFieldCount(keyword));
    }

    let cooking_time: u32 = parts[3]
        .parse()
        .map_err(|_| CommandError::InvalidMinutes(parts[3].to_string()))?;
    let category = Category::from_str(parts[4])?;

    Ok(RecipeDraft {
        title: parts[0].to_string(),
        ingredients: split_list(parts[1], ','),
        preparation_steps: split_list(parts[2], ';'),
        cooking_time,
        category,
    })
}

fn split_list(field: &str, separator: char) -> Vec<String> {
    field
        .split(separator)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Usage text printed by `help`.
pub fn usage() -> &'static str {
    "commands:\n  \
     list\n  \
     add <title> | <ingredients,...> | <steps;...> | <minutes> | <category>\n  \
     update <id> | <title> | <ingredients,...> | <steps;...> | <minutes> | <category>\n  \
     delete <id>\n  \
     help\n  \
     quit\n\
     categories: Vegetarian, Non-Vegetarian, Vegan, Dessert, Breakfast, Lunch, Dinner, Snack, Other"
}
