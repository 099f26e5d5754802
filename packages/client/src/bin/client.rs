//! CLI client for the mise recipe broadcast server.
//!
//! Connects to the server, keeps a local recipe list in sync with broadcast
//! events, and publishes the user's own mutations. Automatically reconnects
//! on disconnection (max 5 attempts with 5 second interval); the view is
//! not resynchronized after a reconnect gap unless a snapshot source is
//! wired in.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin client -- --client-id alice
//! cargo run --bin client -- -c bob -u ws://127.0.0.1:8080/ws
//! ```

use clap::Parser;

use mise_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "CLI client for the real-time recipe broadcast server", long_about = None)]
struct Args {
    /// Client ID announced to the server with `join`
    #[arg(short = 'c', long)]
    client_id: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // No snapshot source: the CLI mirrors the reference behavior and keeps
    // its view across reconnect gaps.
    if let Err(e) = mise_client::run_client(args.url, args.client_id, None).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
