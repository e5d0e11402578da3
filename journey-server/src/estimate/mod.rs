//! Cost estimation for a submitted itinerary.
//!
//! The estimator validates the required fields, sums entrance fees and
//! the transport fare from the pricing table, and stamps the result with
//! a fresh reference id. For a fixed table the total depends only on the
//! submission; the reference id is the only thing that varies.

mod engine;
mod error;
mod reference;
mod request;

pub use engine::{EstimateResult, Estimator};
pub use error::EstimateError;
pub use reference::ReferenceId;
pub use request::ItineraryPayload;
