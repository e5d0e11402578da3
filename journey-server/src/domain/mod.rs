//! Domain types for the journey estimator.
//!
//! The reference dataset (regions, cities, places, transport modes) and
//! rupee amounts. Everything here is read-only once constructed.

mod catalog;
mod money;

pub use catalog::{Catalog, City, Region, TransportMode};
pub use money::{CURRENCY, Inr};
