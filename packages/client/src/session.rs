//! Interactive WebSocket client session.
//!
//! One session per connection: a read task applies inbound broadcast events
//! to the shared view, a rustyline thread feeds typed commands to a write
//! task that publishes the corresponding mutation events. The client's own
//! mutations come back over the broadcast channel like everyone else's, so
//! the local view only ever changes by applying events.

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::{Mutex, mpsc};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};
use uuid::Uuid;

use mise_server::domain::{Recipe, RecipeEvent, RecipeId, Timestamp, UserId};
use mise_server::infrastructure::dto::websocket::{ClientMessage, ServerMessage};

use crate::commands::{Command, RecipeDraft, parse_command, usage};
use crate::error::{ClientError, CommandError};
use crate::formatter::MessageFormatter;
use crate::ui::redisplay_prompt;
use crate::view::ClientView;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user quit; do not reconnect.
    Quit,
    /// The connection dropped mid-session.
    ConnectionLost,
}

/// Run one client session over a fresh connection.
pub async fn run_session(
    url: &str,
    client_id: &str,
    view: Arc<Mutex<ClientView>>,
) -> Result<SessionEnd, ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("connected to recipe server");
    println!(
        "\nYou are '{}'. Type 'help' for commands, 'quit' to exit.\n",
        client_id
    );

    let (mut write, mut read) = ws_stream.split();

    // Announce logical identity. The server records it for its connection
    // listing; fan-out is global regardless.
    let join = ClientMessage::Join {
        client_id: client_id.to_string(),
    };
    let join_json =
        serde_json::to_string(&join).map_err(|e| ClientError::ConnectionError(e.to_string()))?;
    write
        .send(Message::Text(join_json.into()))
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    // Read task: apply inbound broadcast events to the shared view.
    let view_for_read = view.clone();
    let client_id_for_read = client_id.to_string();
    let mut read_task = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    apply_server_message(&view_for_read, &client_id_for_read, &text).await;
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("server closed the connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!("websocket read error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    });

    // Blocking thread for rustyline (synchronous readline).
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();
    let prompt_client_id = client_id.to_string();
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        let prompt = format!("{}> ", prompt_client_id);

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    let _ = input_tx.send("quit".to_string());
                    break;
                }
                Err(err) => {
                    tracing::error!("readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Write task: parse commands and publish mutation events.
    let view_for_write = view.clone();
    let write_client_id = client_id.to_string();
    let mut write_task = tokio::spawn(async move {
        let mut user_quit = false;

        while let Some(line) = input_rx.recv().await {
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    println!("{}", e);
                    redisplay_prompt(&write_client_id);
                    continue;
                }
            };

            let message = match command {
                Command::Quit => {
                    user_quit = true;
                    break;
                }
                Command::Help => {
                    println!("{}", usage());
                    redisplay_prompt(&write_client_id);
                    continue;
                }
                Command::List => {
                    let view = view_for_write.lock().await;
                    print!("{}", MessageFormatter::format_view(&view));
                    redisplay_prompt(&write_client_id);
                    continue;
                }
                Command::Add(draft) => {
                    // A fresh identifier stands in for the one the
                    // persistence collaborator would assign on create.
                    let recipe_id = Uuid::new_v4().to_string();
                    match recipe_from_draft(recipe_id, draft, &write_client_id) {
                        Ok(recipe) => ClientMessage::NewRecipe {
                            recipe: recipe.into(),
                        },
                        Err(e) => {
                            println!("{}", e);
                            redisplay_prompt(&write_client_id);
                            continue;
                        }
                    }
                }
                Command::Update { recipe_id, draft } => {
                    match recipe_from_draft(recipe_id, draft, &write_client_id) {
                        Ok(recipe) => ClientMessage::UpdateRecipe {
                            recipe: recipe.into(),
                        },
                        Err(e) => {
                            println!("{}", e);
                            redisplay_prompt(&write_client_id);
                            continue;
                        }
                    }
                }
                Command::Delete { recipe_id } => ClientMessage::DeleteRecipe { recipe_id },
            };

            let json = match serde_json::to_string(&message) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("failed to serialize message: {}", e);
                    continue;
                }
            };

            if let Err(e) = write.send(Message::Text(json.into())).await {
                tracing::warn!("failed to send message: {}", e);
                break;
            }
        }

        user_quit
    });

    // If either task completes, abort the other.
    let session_end = tokio::select! {
        _ = &mut read_task => {
            write_task.abort();
            SessionEnd::ConnectionLost
        }
        write_result = &mut write_task => {
            read_task.abort();
            match write_result {
                Ok(true) => SessionEnd::Quit,
                _ => SessionEnd::ConnectionLost,
            }
        }
    };

    Ok(session_end)
}

/// Parse one inbound frame and apply it to the view.
///
/// Frames that fail to parse or carry an invalid recipe are dropped with a
/// warning; the view is never corrupted by a malformed event.
async fn apply_server_message(view: &Arc<Mutex<ClientView>>, client_id: &str, text: &str) {
    let message = match serde_json::from_str::<ServerMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("dropping malformed server message: {}", e);
            return;
        }
    };

    let event = match RecipeEvent::try_from(message) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("dropping invalid recipe event: {}", e);
            return;
        }
    };

    let notice = MessageFormatter::format_event_notice(&event);
    {
        let mut view = view.lock().await;
        view.apply(event);
    }
    print!("{}", notice);
    redisplay_prompt(client_id);
}

fn recipe_from_draft(
    recipe_id: String,
    draft: RecipeDraft,
    client_id: &str,
) -> Result<Recipe, CommandError> {
    let now = Timestamp::now();
    Ok(Recipe::new(
        RecipeId::new(recipe_id)?,
        draft.title,
        draft.ingredients,
        draft.preparation_steps,
        draft.cooking_time,
        draft.category,
        None,
        UserId::new(client_id.to_string())?,
        now,
        now,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mise_server::domain::Category;

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "Tomato Soup".to_string(),
            ingredients: vec!["tomato".to_string()],
            preparation_steps: vec!["boil".to_string()],
            cooking_time: 25,
            category: Category::Dinner,
        }
    }

    #[test]
    fn test_recipe_from_draft_attaches_identity_and_timestamps() {
        // given / when:
        let recipe = recipe_from_draft("r1".to_string(), draft(), "alice").unwrap();

        // then:
        assert_eq!(recipe.id.as_str(), "r1");
        assert_eq!(recipe.user_id.as_str(), "alice");
        assert_eq!(recipe.created_at, recipe.updated_at);
    }

    #[test]
    fn test_recipe_from_draft_rejects_empty_ingredient_list() {
        // given:
        let mut draft = draft();
        draft.ingredients.clear();

        // when:
        let result = recipe_from_draft("r1".to_string(), draft, "alice");

        // then:
        assert!(matches!(result, Err(CommandError::InvalidRecipe(_))));
    }

    #[tokio::test]
    async fn test_apply_server_message_updates_the_view() {
        // given:
        let view = Arc::new(Mutex::new(ClientView::new()));
        let json = r#"{
            "type": "recipe_added",
            "recipe": {
                "id": "r1",
                "title": "Tomato Soup",
                "ingredients": ["tomato"],
                "preparation_steps": ["boil"],
                "cooking_time": 25,
                "category": "Dinner",
                "user_id": "alice",
                "created_at": 1000,
                "updated_at": 1000
            }
        }"#;

        // when:
        apply_server_message(&view, "alice", json).await;

        // then:
        let view = view.lock().await;
        assert_eq!(view.len(), 1);
        assert_eq!(view.recipes()[0].title, "Tomato Soup");
    }

    #[tokio::test]
    async fn test_malformed_server_message_is_dropped() {
        // given:
        let view = Arc::new(Mutex::new(ClientView::new()));

        // when: not JSON at all, then JSON with an invalid recipe
        apply_server_message(&view, "alice", "not json").await;
        apply_server_message(
            &view,
            "alice",
            r#"{"type":"recipe_deleted","recipe_id":""}"#,
        )
        .await;

        // then: neither was applied
        assert!(view.lock().await.is_empty());
    }
}
