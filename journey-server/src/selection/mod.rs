//! Client-side selection state.
//!
//! Holds one user's in-progress itinerary, enforces that changing a
//! higher-level choice clears the choices that depend on it, and tracks
//! submissions so only the latest one's outcome is shown.

mod error;
mod itinerary;
mod store;
mod submission;

pub use error::SelectionError;
pub use itinerary::{Itinerary, Stage};
pub use store::SelectionStore;
pub use submission::{SubmissionStatus, SubmissionTicket, SubmissionTracker};
