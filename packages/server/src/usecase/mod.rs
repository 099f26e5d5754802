//! UseCase layer: connection lifecycle and event publication.

pub mod connect_client;
pub mod disconnect_client;
pub mod error;
pub mod get_connections;
pub mod publish_event;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::PublishError;
pub use get_connections::GetConnectionsUseCase;
pub use publish_event::PublishEventUseCase;
