//! Web layer for the journey estimator.
//!
//! Serves the reference dataset and the `/submit-form` estimation
//! endpoint.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
