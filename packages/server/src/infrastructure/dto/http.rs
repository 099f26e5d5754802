//! HTTP API response DTOs.

use serde::Serialize;

/// One entry in the connection listing.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionDto {
    pub token: String,
    /// Present once the client has sent `join`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// RFC 3339, UTC.
    pub connected_at: String,
}

/// Response of `GET /api/connections`.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionListDto {
    pub count: usize,
    pub connections: Vec<ConnectionDto>,
}
