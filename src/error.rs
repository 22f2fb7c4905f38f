//! API Errors

use thiserror::Error;

/// Failures talking to the Activities API.
///
/// A non-2xx reply to signup/unregister is not an error: it carries a
/// `detail` for the user and comes back as `MutationOutcome::Rejected`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Response body was not the expected JSON
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Read endpoint answered with a non-2xx status
    #[error("server responded with status {0}")]
    Status(u16),
}
