//! Shared application state.

use std::sync::Arc;

use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, GetConnectionsUseCase, PublishEventUseCase,
};

/// Shared application state, injected into every handler.
///
/// The delivery channels themselves live behind the broadcaster the
/// usecases hold; nothing here is process-global.
pub struct AppState {
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    pub publish_event_usecase: Arc<PublishEventUseCase>,
    pub get_connections_usecase: Arc<GetConnectionsUseCase>,
}
