//! Client execution logic with reconnection support.
//!
//! Drives the lifecycle state machine: the session runs while the
//! connection is `Open`; transient losses move to `Reconnecting` with a
//! capped number of retries, and exhaustion closes the connection for good.
//! The view lives here, outside any single session, so it survives
//! reconnects. Without a snapshot source, events missed during a gap stay
//! missed and the view is stale until the caller repairs it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::error::ClientError;
use crate::lifecycle::{ConnectionState, LifecycleEvent, next_state, should_attempt_reconnect};
use crate::session::{SessionEnd, run_session};
use crate::snapshot::SnapshotSource;
use crate::view::ClientView;

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const RECONNECT_INTERVAL_SECS: u64 = 5;

/// Run the client until the user quits or reconnection gives up.
///
/// # Arguments
///
/// * `url` - WebSocket server URL
/// * `client_id` - Logical identity announced with `join`
/// * `snapshot_source` - Optional authoritative snapshot fetch, applied on
///   every transition into `Open` to repair events missed during a gap
pub async fn run_client(
    url: String,
    client_id: String,
    snapshot_source: Option<Arc<dyn SnapshotSource>>,
) -> Result<(), ClientError> {
    let view = Arc::new(Mutex::new(ClientView::new()));
    let mut state = ConnectionState::Connecting;
    let mut reconnect_count = 0;

    loop {
        tracing::info!(
            "connecting to {} as '{}' (attempt {}/{})",
            url,
            client_id,
            reconnect_count + 1,
            MAX_RECONNECT_ATTEMPTS
        );

        resync_view(&view, snapshot_source.as_deref()).await;

        match run_session(&url, &client_id, view.clone()).await {
            // The handshake succeeded, so the session was Open before it
            // ended either way.
            Ok(SessionEnd::Quit) => {
                state = next_state(state, LifecycleEvent::Established);
                state = next_state(state, LifecycleEvent::SessionEnded);
                tracing::info!("session ended normally");
                break;
            }
            Ok(SessionEnd::ConnectionLost) => {
                state = next_state(state, LifecycleEvent::Established);
                state = next_state(state, LifecycleEvent::ConnectionLost);
                reconnect_count = attempts_after_session(true, reconnect_count);
                tracing::warn!("connection lost");
            }
            Err(e) => {
                state = next_state(state, LifecycleEvent::ConnectionLost);
                tracing::warn!("connection failed: {}", e);
            }
        }

        if !should_attempt_reconnect(reconnect_count, MAX_RECONNECT_ATTEMPTS) {
            state = next_state(state, LifecycleEvent::GaveUp);
            tracing::error!(
                "failed to reconnect after {} attempts, giving up",
                MAX_RECONNECT_ATTEMPTS
            );
            debug_assert_eq!(state, ConnectionState::Closed);
            return Err(ClientError::ConnectionError(
                "reconnection attempts exhausted".to_string(),
            ));
        }

        reconnect_count += 1;
        tracing::info!(
            "reconnecting in {} seconds... (attempt {}/{})",
            RECONNECT_INTERVAL_SECS,
            reconnect_count,
            MAX_RECONNECT_ATTEMPTS
        );
        tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
    }

    debug_assert_eq!(state, ConnectionState::Closed);
    Ok(())
}

/// Reconnect attempts are budgeted per gap: a session that reached `Open`
/// resets the count, so only consecutive failed connects run against the
/// cap. A long-lived client with occasional transient losses never
/// exhausts its budget as long as each reconnect succeeds.
fn attempts_after_session(session_was_open: bool, attempts: u32) -> u32 {
    if session_was_open { 0 } else { attempts }
}

/// Replace the view with a fresh authoritative snapshot, when a source is
/// wired. A failed fetch keeps the existing view; it is stale either way.
async fn resync_view(view: &Arc<Mutex<ClientView>>, source: Option<&dyn SnapshotSource>) {
    let Some(source) = source else {
        return;
    };

    match source.fetch_all().await {
        Ok(recipes) => {
            let mut view = view.lock().await;
            *view = ClientView::from_snapshot(recipes);
            tracing::info!("view resynchronized from snapshot ({} recipes)", view.len());
        }
        Err(e) => {
            tracing::warn!("snapshot fetch failed, keeping current view: {}", e);
        }
    }
}
