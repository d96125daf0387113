//! Error types for skillbar-dispatch

use skillbar_core::SessionId;
use thiserror::Error;

/// Result type for dispatch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the host
///
/// Only host programming errors end up here. Rejected player input is
/// reported through [`Dispatch`](crate::Dispatch), never as an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The directory holds no bar for the session
    #[error("{0} has no action bar")]
    SessionNotFound(SessionId),

    /// Core error (bad slot index, bad configuration)
    #[error("core error: {0}")]
    Core(#[from] skillbar_core::Error),
}
