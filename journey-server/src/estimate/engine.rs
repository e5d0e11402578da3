//! The estimator.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::{CURRENCY, Inr};
use crate::pricing::PricingTable;

use super::error::EstimateError;
use super::reference::ReferenceId;
use super::request::ItineraryPayload;

/// Message attached to every successful estimate.
const SUCCESS_MESSAGE: &str = "Itinerary processed successfully.";

/// A costed itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateResult {
    /// Sum of entrance fees and the transport fare
    pub total: Inr,

    /// Correlation handle for this submission
    pub reference_id: ReferenceId,

    /// Human-readable outcome
    pub message: String,
}

impl EstimateResult {
    /// The total in whole rupees.
    pub fn total_amount(&self) -> u64 {
        self.total.amount()
    }

    /// Always `"INR"`.
    pub fn currency(&self) -> &'static str {
        CURRENCY
    }
}

/// Costs itineraries against a fixed pricing table.
///
/// Holds no mutable state, so one estimator can serve any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Estimator {
    pricing: Arc<PricingTable>,
}

impl Estimator {
    /// Create an estimator over the given table.
    pub fn new(pricing: Arc<PricingTable>) -> Self {
        Self { pricing }
    }

    /// The table this estimator prices against.
    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Estimate a typed payload.
    ///
    /// Fails with [`EstimateError::MissingField`] before any costing if
    /// state, city or transport is missing.
    pub fn estimate(&self, itinerary: &ItineraryPayload) -> Result<EstimateResult, EstimateError> {
        itinerary.validate()?;
        let transport = itinerary.transport()?;

        let total = self.total_cost(&itinerary.selected_places, transport)?;
        let reference_id = ReferenceId::generate();

        debug!(
            reference_id = %reference_id,
            places = itinerary.selected_places.len(),
            transport,
            total = total.amount(),
            "Estimated itinerary"
        );

        Ok(EstimateResult {
            total,
            reference_id,
            message: SUCCESS_MESSAGE.to_string(),
        })
    }

    /// Estimate a raw JSON submission.
    ///
    /// See [`ItineraryPayload::from_json`] for how loosely-typed bodies
    /// are read.
    pub fn estimate_json(&self, body: &Value) -> Result<EstimateResult, EstimateError> {
        let itinerary = ItineraryPayload::from_json(body)?;
        self.estimate(&itinerary)
    }

    /// Entrance fees for `places` plus the fare for `transport`.
    ///
    /// Unpriced names contribute zero. A place listed twice is charged
    /// twice. Overflow means the pricing table is nonsense and is reported
    /// as an internal error.
    pub fn total_cost<S: AsRef<str>>(
        &self,
        places: &[S],
        transport: &str,
    ) -> Result<Inr, EstimateError> {
        let fares = places
            .iter()
            .map(|p| self.pricing.entrance_fee(p.as_ref()))
            .chain(std::iter::once(self.pricing.transport_fee(transport)));

        let mut total: u64 = 0;
        for fee in fares {
            total = total
                .checked_add(fee)
                .ok_or_else(|| EstimateError::Internal("itinerary total overflowed".into()))?;
        }

        Ok(Inr(total))
    }
}
