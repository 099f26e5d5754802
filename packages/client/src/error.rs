//! Error types for the CLI client.

use thiserror::Error;

/// Client-side failures.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The connection could not be established or was lost.
    #[error("connection error: {0}")]
    ConnectionError(String),
}

/// Failure to fetch an authoritative snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot fetch failed: {0}")]
    FetchFailed(String),
}

/// Failure to parse a CLI command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error(
        "expected '{0} <title> | <ingredients,...> | <steps;...> | <minutes> | <category>'"
    )]
    WrongFieldCount(&'static str),

    #[error("'{0}' is not a valid number of minutes")]
    InvalidMinutes(String),

    #[error("missing recipe id")]
    MissingRecipeId,

    #[error("invalid recipe: {0}")]
    InvalidRecipe(#[from] mise_server::domain::ValidationError),
}
