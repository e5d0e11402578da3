//! Pricing table for entrance fees and transport fares.
//!
//! Lookups never fail: a name missing from the table costs nothing.
//! Catalogs can list places that have not been priced yet, and an
//! estimate for them should still go through.

mod error;
mod table;

pub use error::PricingError;
pub use table::{FeeSchedule, PricingTable};
