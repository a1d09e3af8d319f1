//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No campaign exists with the given id.
    #[error("campaign not found: {0}")]
    CampaignNotFound(String),

    /// No creator exists with the given id.
    #[error("creator not found: {0}")]
    CreatorNotFound(String),

    /// Input rejected at a validation boundary. The message is user-facing.
    #[error("validation error: {0}")]
    Validation(String),

    /// An operation was invoked in a state it must never be reached in.
    #[error("invariant violation: {0}")]
    Invariant(String),

    /// A storage or serialization failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
