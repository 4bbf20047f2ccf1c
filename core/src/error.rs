//! Error types for the test client.
//!
//! # Design
//! None of these ever escape a verb call. Request-building and transport
//! failures are handed to the completion callback or reported as a failing
//! assertion; decode failures are recovered inside the decoder and never
//! become a `ClientError` at all.

use thiserror::Error;

/// Failures that can end a call before a response is available.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, reset, DNS failure and other socket-level errors.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request could not be turned into a valid wire request
    /// (bad header name, unparseable URL, rejected method).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A structured payload could not be serialized to JSON.
    #[error("payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The response arrived but its body could not be read to the end.
    #[error("reading response body failed: {0}")]
    Body(String),

    /// Client options text could not be parsed.
    #[error("invalid client options: {0}")]
    InvalidOptions(String),
}
