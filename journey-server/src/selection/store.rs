//! The selection store.

use std::sync::Arc;

use tracing::{debug, info};

use crate::client::{ClientError, EstimateClient};
use crate::domain::{Catalog, City, Region, TransportMode};
use crate::web::EstimateResponse;

use super::error::SelectionError;
use super::itinerary::{Itinerary, Stage};
use super::submission::{SubmissionStatus, SubmissionTicket, SubmissionTracker};

/// One user's in-progress itinerary, checked against the reference dataset.
///
/// Every selection is resolved against the catalog before the itinerary
/// changes, so the itinerary only ever holds a city of its region and
/// places of its city. A rejected selection leaves everything untouched.
///
/// The store has a single owner and is not shared between sessions.
pub struct SelectionStore {
    catalog: Arc<Catalog>,
    itinerary: Itinerary,
    submissions: SubmissionTracker,
}

impl SelectionStore {
    /// Create a store with an empty itinerary.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            itinerary: Itinerary::new(),
            submissions: SubmissionTracker::new(),
        }
    }

    /// The reference dataset this store checks against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current itinerary.
    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Choose a region, clearing city and places.
    pub fn select_region(&mut self, name: &str) -> Result<&mut Self, SelectionError> {
        if self.catalog.region(name).is_none() {
            return Err(SelectionError::UnknownRegion(name.to_string()));
        }
        self.itinerary.select_region(name);
        Ok(self)
    }

    /// Choose a city of the current region, clearing places.
    pub fn select_city(&mut self, name: &str) -> Result<&mut Self, SelectionError> {
        let region = self.current_region().ok_or(SelectionError::NoRegion)?;
        if region.city(name).is_none() {
            return Err(SelectionError::UnknownCity {
                region: region.name.clone(),
                city: name.to_string(),
            });
        }
        self.itinerary.select_city(name);
        Ok(self)
    }

    /// Add or remove a place of the current city.
    pub fn toggle_place(&mut self, name: &str) -> Result<&mut Self, SelectionError> {
        let city = self.current_city().ok_or(SelectionError::NoCity)?;
        if !city.has_place(name) {
            return Err(SelectionError::UnknownPlace {
                city: city.name.clone(),
                place: name.to_string(),
            });
        }
        self.itinerary.toggle_place(name);
        Ok(self)
    }

    /// Choose a transport mode.
    pub fn select_transport(&mut self, name: &str) -> Result<&mut Self, SelectionError> {
        if self.catalog.transport_mode(name).is_none() {
            return Err(SelectionError::UnknownTransport(name.to_string()));
        }
        self.itinerary.select_transport(name);
        Ok(self)
    }

    /// See [`Itinerary::progress`].
    pub fn progress(&self) -> f64 {
        self.itinerary.progress()
    }

    /// See [`Itinerary::can_submit`].
    pub fn can_submit(&self) -> bool {
        self.itinerary.can_submit()
    }

    /// See [`Itinerary::is_stage_visible`].
    pub fn is_stage_visible(&self, stage: Stage) -> bool {
        self.itinerary.is_stage_visible(stage)
    }

    /// Regions matching a search query (case-insensitive substring).
    pub fn regions(&self, query: &str) -> Vec<&Region> {
        self.catalog.search_regions(query)
    }

    /// Cities on offer: those of the chosen region, or none.
    pub fn cities(&self) -> &[City] {
        self.current_region()
            .map(|r| r.cities.as_slice())
            .unwrap_or(&[])
    }

    /// Places on offer: those of the chosen city, or none.
    pub fn places(&self) -> &[String] {
        self.current_city()
            .map(|c| c.places.as_slice())
            .unwrap_or(&[])
    }

    /// Transport modes on offer.
    pub fn transport_modes(&self) -> &[TransportMode] {
        self.catalog.transport_modes()
    }

    /// Status of the latest submission.
    pub fn status(&self) -> &SubmissionStatus {
        self.submissions.status()
    }

    /// Start a submission of the current itinerary.
    ///
    /// Returns `None`, changing nothing, if the itinerary cannot be
    /// submitted yet. Otherwise any submission already in flight is
    /// superseded. The itinerary itself is never reset.
    pub fn begin_submission(&mut self) -> Option<SubmissionTicket> {
        if !self.can_submit() {
            debug!("Submission attempted before itinerary was complete");
            return None;
        }
        let ticket = self.submissions.start(self.itinerary.to_payload());
        debug!(generation = ticket.generation(), "Submission started");
        Some(ticket)
    }

    /// Record the outcome of a submission.
    ///
    /// Returns false if a newer submission has started since, in which
    /// case the outcome is discarded.
    pub fn complete_submission(
        &mut self,
        ticket: &SubmissionTicket,
        outcome: Result<EstimateResponse, ClientError>,
    ) -> bool {
        self.submissions.finish(ticket, outcome)
    }

    /// Submit the current itinerary and wait for the outcome.
    ///
    /// Returns `None` if the itinerary cannot be submitted yet. This holds
    /// the store for the whole round trip; callers that need to resubmit
    /// while a request is in flight should use [`Self::begin_submission`]
    /// and [`Self::complete_submission`] instead.
    pub async fn submit(&mut self, client: &EstimateClient) -> Option<&SubmissionStatus> {
        let ticket = self.begin_submission()?;
        let outcome = client.submit(ticket.payload()).await;

        match &outcome {
            Ok(response) => info!(
                reference_id = %response.data.reference_id,
                total = response.data.total_amount,
                "Itinerary estimate received"
            ),
            Err(e) => info!(error = %e, "Itinerary submission failed"),
        }

        self.complete_submission(&ticket, outcome);
        Some(self.status())
    }

    fn current_region(&self) -> Option<&Region> {
        self.itinerary
            .region()
            .and_then(|name| self.catalog.region(name))
    }

    fn current_city(&self) -> Option<&City> {
        let city = self.itinerary.city()?;
        self.current_region()?.city(city)
    }
}
