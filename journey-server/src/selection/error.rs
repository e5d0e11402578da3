//! Selection error types.

/// A selection that the reference dataset does not allow.
///
/// The store leaves its state unchanged when it returns one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("a region must be selected first")]
    NoRegion,

    #[error("{city} is not a city in {region}")]
    UnknownCity { region: String, city: String },

    #[error("a city must be selected first")]
    NoCity,

    #[error("{place} is not a place in {city}")]
    UnknownPlace { city: String, place: String },

    #[error("unknown transport mode: {0}")]
    UnknownTransport(String),
}
