//! # Submission Errors
//!
//! Everything that can go wrong between the new-product form and whatever receives
//! the record. The view model only distinguishes success from failure; the variants
//! exist for logging and tests.

/// Errors that can occur while submitting a product record.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Submission actor closed")]
    ActorClosed,
    #[error("Submission actor dropped response channel")]
    ActorDropped,
    #[error("Submission timed out after {0} ms")]
    Timeout(u64),
    #[error("Submission rejected: {0}")]
    Rejected(String),
}
