//! Server error types.

use thiserror::Error;

/// Errors that stop the responder from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening address could not be acquired.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
