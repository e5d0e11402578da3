//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::Catalog;
use crate::estimate::Estimator;
use crate::pricing::PricingTable;

/// Shared application state.
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Itinerary estimator over the loaded pricing table
    pub estimator: Arc<Estimator>,

    /// Reference dataset served to clients
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Catalog, pricing: PricingTable) -> Self {
        Self {
            estimator: Arc::new(Estimator::new(Arc::new(pricing))),
            catalog: Arc::new(catalog),
        }
    }
}
