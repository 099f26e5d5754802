//! Connection lifecycle state machine.
//!
//! `Connecting -> Open -> Closed`, with `Open -> Reconnecting -> Open` on
//! transient network loss and `Reconnecting -> Closed` on give-up. The
//! transition logic is pure so the runner's behavior can be tested without
//! a network.

/// Lifecycle states of the client connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Attempting the initial connection.
    Connecting,
    /// Connected; the session is running.
    Open,
    /// Lost the connection; retrying.
    Reconnecting,
    /// Terminal. Entered on user exit or when retries are exhausted.
    Closed,
}

/// Events driving lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The transport handshake succeeded.
    Established,
    /// The transport dropped mid-session or the connect attempt failed.
    ConnectionLost,
    /// The user ended the session.
    SessionEnded,
    /// Reconnection attempts are exhausted.
    GaveUp,
}

/// Compute the next lifecycle state.
///
/// Events that make no sense in the current state leave it unchanged; a
/// closed connection never transitions again.
pub fn next_state(state: ConnectionState, event: LifecycleEvent) -> ConnectionState {
    use ConnectionState::*;
    use LifecycleEvent::*;

    match (state, event) {
        (Connecting, Established) => Open,
        (Connecting, ConnectionLost) => Reconnecting,
        (Open, ConnectionLost) => Reconnecting,
        (Open, SessionEnded) => Closed,
        (Reconnecting, Established) => Open,
        (Reconnecting, GaveUp) => Closed,
        (state, _) => state,
    }
}

/// Whether another reconnection attempt should be made.
///
/// # Arguments
///
/// * `current_attempt` - The current reconnection attempt count (0-indexed)
/// * `max_attempts` - The maximum number of reconnection attempts allowed
pub fn should_attempt_reconnect(current_attempt: u32, max_attempts: u32) -> bool {
    current_attempt < max_attempts
}

#[cfg(test)]
mod tests {
    use super::*;
    use ConnectionState::*;
    use LifecycleEvent::*;

    #[test]
    fn test_connecting_to_open_on_established() {
        // given / when:
        let state = next_state(Connecting, Established);

        // then:
        assert_eq!(state, Open);
    }

    #[test]
    fn test_open_to_reconnecting_on_connection_lost() {
        // given / when:
        let state = next_state(Open, ConnectionLost);

        // then:
        assert_eq!(state, Reconnecting);
    }

    #[test]
    fn test_reconnecting_back_to_open_on_established() {
        // given / when:
        let state = next_state(Reconnecting, Established);

        // then:
        assert_eq!(state, Open);
    }

    #[test]
    fn test_reconnecting_to_closed_on_give_up() {
        // given / when:
        let state = next_state(Reconnecting, GaveUp);

        // then:
        assert_eq!(state, Closed);
    }

    #[test]
    fn test_open_to_closed_on_session_ended() {
        // given / when:
        let state = next_state(Open, SessionEnded);

        // then:
        assert_eq!(state, Closed);
    }

    #[test]
    fn test_closed_is_terminal() {
        // given:
        let events = [Established, ConnectionLost, SessionEnded, GaveUp];

        for event in events {
            // when:
            let state = next_state(Closed, event);

            // then:
            assert_eq!(state, Closed);
        }
    }

    #[test]
    fn test_should_attempt_reconnect_within_limit() {
        // given / when / then:
        assert!(should_attempt_reconnect(0, 5));
        assert!(should_attempt_reconnect(4, 5));
    }

    #[test]
    fn test_should_not_attempt_reconnect_at_limit() {
        // given / when / then:
        assert!(!should_attempt_reconnect(5, 5));
        assert!(!should_attempt_reconnect(6, 5));
    }
}
