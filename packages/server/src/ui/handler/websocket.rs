//! WebSocket connection handler.
//!
//! One socket per client. The connection registers before the upgrade
//! completes; afterwards two tasks run until either side closes: a writer
//! task draining the connection's delivery channel into the socket, and a
//! reader task parsing inbound messages and dispatching them as publish
//! triggers. Teardown unregisters the connection exactly once.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::domain::{ClientId, ConnectionToken, Recipe, RecipeEvent, RecipeId};
use crate::infrastructure::dto::websocket::ClientMessage;
use crate::ui::state::AppState;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // Create the delivery channel for this client and register it before
    // the upgrade completes, so events published during the handshake
    // already reach it.
    let (tx, rx) = mpsc::unbounded_channel();
    let token = state.connect_client_usecase.execute(tx).await;

    // A failed upgrade never reaches handle_socket, so the registration
    // must be rolled back here or the token stays in the registry forever.
    let state_for_failure = state.clone();
    ws.on_failed_upgrade(move |error| {
        tracing::warn!("websocket upgrade failed for connection {}: {}", token, error);
        tokio::spawn(async move {
            state_for_failure
                .disconnect_client_usecase
                .execute(token)
                .await;
        });
    })
    .on_upgrade(move |socket| handle_socket(socket, state, token, rx))
}

/// Spawns the writer task: messages queued on the connection's delivery
/// channel are pushed to its WebSocket.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    token: ConnectionToken,
    rx: mpsc::UnboundedReceiver<String>,
) {
    let (sender, mut receiver) = socket.split();

    let mut send_task = pusher_loop(rx, sender);

    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("websocket error on connection {}: {}", token, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_client_message(&state_for_recv, token, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("received ping from connection {}", token);
                }
                Message::Close(_) => {
                    tracing::info!("connection {} requested close", token);
                    break;
                }
                _ => {}
            }
        }
    });

    // If either task completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Teardown: unregister is idempotent, so a racing close signal is safe.
    state.disconnect_client_usecase.execute(token).await;
}

/// Parse one inbound frame and dispatch it.
///
/// Malformed frames and payloads failing recipe validation are dropped with
/// a warning; nothing a client sends can take the connection down.
async fn handle_client_message(state: &Arc<AppState>, token: ConnectionToken, text: &str) {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("dropping malformed message from connection {}: {}", token, e);
            return;
        }
    };

    match message {
        ClientMessage::Join { client_id } => match ClientId::new(client_id) {
            Ok(client_id) => {
                state.connect_client_usecase.identify(token, client_id).await;
            }
            Err(e) => {
                tracing::warn!("dropping join from connection {}: {}", token, e);
            }
        },
        ClientMessage::NewRecipe { recipe } => {
            publish(state, token, Recipe::try_from(recipe).map(RecipeEvent::Added)).await;
        }
        ClientMessage::UpdateRecipe { recipe } => {
            publish(
                state,
                token,
                Recipe::try_from(recipe).map(RecipeEvent::Updated),
            )
            .await;
        }
        ClientMessage::DeleteRecipe { recipe_id } => {
            publish(
                state,
                token,
                RecipeId::new(recipe_id).map(RecipeEvent::Deleted),
            )
            .await;
        }
    }
}

async fn publish(
    state: &Arc<AppState>,
    token: ConnectionToken,
    event: Result<RecipeEvent, crate::domain::ValidationError>,
) {
    let event = match event {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("dropping malformed event from connection {}: {}", token, e);
            return;
        }
    };

    if let Err(e) = state.publish_event_usecase.execute(event).await {
        tracing::warn!("publish from connection {} failed: {}", token, e);
    }
}
