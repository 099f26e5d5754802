//! Recipe event broadcast server.
//!
//! Accepts recipe mutation events from connected clients and fans them out
//! to all connected clients, the publisher included.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;

use mise_server::{
    infrastructure::{ConnectionRegistry, WebSocketBroadcaster},
    ui::Server,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, GetConnectionsUseCase, PublishEventUseCase,
    },
};
use mise_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Real-time recipe event broadcast server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. ConnectionRegistry
    // 2. EventBroadcaster
    // 3. UseCases
    // 4. Server

    // 1. The registry owns every connection's delivery channel
    let registry = Arc::new(ConnectionRegistry::new());

    // 2. WebSocket-backed broadcaster over the registry
    let broadcaster = Arc::new(WebSocketBroadcaster::new(registry));

    // 3. UseCases
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(broadcaster.clone()));
    let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(broadcaster.clone()));
    let publish_event_usecase = Arc::new(PublishEventUseCase::new(broadcaster.clone()));
    let get_connections_usecase = Arc::new(GetConnectionsUseCase::new(broadcaster));

    // 4. Create and run the server
    let server = Server::new(
        connect_client_usecase,
        disconnect_client_usecase,
        publish_event_usecase,
        get_connections_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
