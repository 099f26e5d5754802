//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, GetConnectionsUseCase, PublishEventUseCase,
};

use super::{
    handler::{
        http::{get_connections, health_check},
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Recipe event broadcast server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     connect_client_usecase,
///     disconnect_client_usecase,
///     publish_event_usecase,
///     get_connections_usecase,
/// );
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    connect_client_usecase: Arc<ConnectClientUseCase>,
    disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    publish_event_usecase: Arc<PublishEventUseCase>,
    get_connections_usecase: Arc<GetConnectionsUseCase>,
}

impl Server {
    pub fn new(
        connect_client_usecase: Arc<ConnectClientUseCase>,
        disconnect_client_usecase: Arc<DisconnectClientUseCase>,
        publish_event_usecase: Arc<PublishEventUseCase>,
        get_connections_usecase: Arc<GetConnectionsUseCase>,
    ) -> Self {
        Self {
            connect_client_usecase,
            disconnect_client_usecase,
            publish_event_usecase,
            get_connections_usecase,
        }
    }

    /// Build the axum router. Public so integration tests can serve the
    /// application on an ephemeral port.
    pub fn into_router(self) -> Router {
        let app_state = Arc::new(AppState {
            connect_client_usecase: self.connect_client_usecase,
            disconnect_client_usecase: self.disconnect_client_usecase,
            publish_event_usecase: self.publish_event_usecase,
            get_connections_usecase: self.get_connections_usecase,
        });

        Router::new()
            // WebSocket endpoint
            .route("/ws", get(websocket_handler))
            // HTTP endpoints
            .route("/api/health", get(health_check))
            .route("/api/connections", get(get_connections))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the broadcast server.
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address
    /// or if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.into_router();

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!(
            "recipe broadcast server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
