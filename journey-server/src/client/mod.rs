//! HTTP client for the estimation service.
//!
//! Used by the selection store to submit an itinerary. Outcomes are split
//! three ways so callers can tell "service unreachable" from "bad input"
//! from "server fault".

mod error;
mod http;

pub use error::ClientError;
pub use http::{ClientConfig, EstimateClient};
