//! HTTP handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::infrastructure::dto::http::{ConnectionDto, ConnectionListDto};
use crate::ui::state::AppState;
use mise_shared::time::timestamp_to_rfc3339;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// List currently registered connections.
pub async fn get_connections(State(state): State<Arc<AppState>>) -> Json<ConnectionListDto> {
    let infos = state.get_connections_usecase.execute().await;

    let connections: Vec<ConnectionDto> = infos
        .into_iter()
        .map(|info| ConnectionDto {
            token: info.token.to_string(),
            client_id: info.client_id.map(|id| id.into_string()),
            connected_at: timestamp_to_rfc3339(info.connected_at.value()),
        })
        .collect();

    Json(ConnectionListDto {
        count: connections.len(),
        connections,
    })
}
