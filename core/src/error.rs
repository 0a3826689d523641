//! Error types for the API client.
//!
//! # Design
//! Transport failures (connect, read, write, malformed URL) are the only
//! I/O-level errors; they get their own type so the driver can abort on
//! them. A non-2xx status from the remote is NOT an error — the client
//! surfaces it as an absent or empty result. Codec failures are programmer
//! or environment errors and propagate like transport failures.

use thiserror::Error;

/// I/O-level failure while executing an HTTP request.
///
/// Never produced for a non-2xx status; those come back to the caller as
/// ordinary responses.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http transport: {0}")]
    Http(#[from] ureq::Error),
}

/// Errors returned by `PlaceholderClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed at the I/O level.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The response body did not match the documented shape.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("encode failed: {0}")]
    Encode(String),
}
