//! Estimation error types.

/// Errors produced while estimating an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    /// State, city or transport is absent or empty
    #[error("missing required itinerary parameters")]
    MissingField,

    /// The submission passed validation but could not be costed
    #[error("internal computation error: {0}")]
    Internal(String),
}
