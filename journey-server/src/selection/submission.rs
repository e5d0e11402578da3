//! Submission status and latest-submission-wins ordering.
//!
//! A submission is started, sent, and finished with its outcome. Starting
//! another submission before the first finishes supersedes it: the older
//! outcome is dropped when it arrives instead of overwriting newer state.

use tracing::debug;

use crate::client::ClientError;
use crate::estimate::ItineraryPayload;
use crate::web::EstimateResponse;

/// What the user should currently see about submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionStatus {
    /// A submission is in flight
    pub loading: bool,

    /// Outcome of the latest finished submission, if it succeeded
    pub result: Option<EstimateResponse>,

    /// Outcome of the latest finished submission, if it failed
    pub error: Option<ClientError>,
}

/// Handle for one in-flight submission.
///
/// Carries a snapshot of the itinerary as it was when submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
    payload: ItineraryPayload,
}

impl SubmissionTicket {
    /// Position of this submission in the sequence started so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The itinerary being submitted.
    pub fn payload(&self) -> &ItineraryPayload {
        &self.payload
    }
}

/// Tracks the latest submission and applies only its outcome.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    latest: u64,
    status: SubmissionStatus,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Start a submission, superseding any in flight.
    ///
    /// Clears the previous result and error.
    pub fn start(&mut self, payload: ItineraryPayload) -> SubmissionTicket {
        self.latest += 1;
        self.status = SubmissionStatus {
            loading: true,
            result: None,
            error: None,
        };
        SubmissionTicket {
            generation: self.latest,
            payload,
        }
    }

    /// Whether `ticket` belongs to the most recent submission.
    pub fn is_current(&self, ticket: &SubmissionTicket) -> bool {
        ticket.generation == self.latest
    }

    /// Record the outcome of a submission.
    ///
    /// Returns false, leaving the status untouched, if a newer submission
    /// has been started since `ticket` was issued.
    pub fn finish(
        &mut self,
        ticket: &SubmissionTicket,
        outcome: Result<EstimateResponse, ClientError>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(
                stale = ticket.generation,
                latest = self.latest,
                "Dropping superseded submission outcome"
            );
            return false;
        }

        self.status = match outcome {
            Ok(response) => SubmissionStatus {
                loading: false,
                result: Some(response),
                error: None,
            },
            Err(error) => SubmissionStatus {
                loading: false,
                result: None,
                error: Some(error),
            },
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::EstimateData;

    fn response(total: u64) -> EstimateResponse {
        EstimateResponse {
            success: true,
            message: "Itinerary processed successfully.".into(),
            journey_cost: format!("Estimated Total: ₹{total}"),
            data: EstimateData {
                base_currency: "INR".into(),
                total_amount: total,
                reference_id: "PMJ-TEST00001".into(),
            },
            thank_you_message: String::new(),
        }
    }

    fn payload() -> ItineraryPayload {
        ItineraryPayload::new("Karnataka", "Bangalore", "Car").with_places(["Bangalore Palace"])
    }

    #[test]
    fn start_sets_loading() {
        let mut tracker = SubmissionTracker::new();
        let ticket = tracker.start(payload());

        assert!(tracker.status().loading);
        assert_eq!(ticket.generation(), 1);
        assert_eq!(ticket.payload(), &payload());
    }

    #[test]
    fn finish_success() {
        let mut tracker = SubmissionTracker::new();
        let ticket = tracker.start(payload());

        assert!(tracker.finish(&ticket, Ok(response(1150))));
        let status = tracker.status();
        assert!(!status.loading);
        assert_eq!(status.result.as_ref().unwrap().data.total_amount, 1150);
        assert!(status.error.is_none());
    }

    #[test]
    fn finish_failure() {
        let mut tracker = SubmissionTracker::new();
        let ticket = tracker.start(payload());
        let err = ClientError::ConnectionFailed {
            message: "refused".into(),
        };

        assert!(tracker.finish(&ticket, Err(err.clone())));
        assert_eq!(tracker.status().error, Some(err));
        assert!(tracker.status().result.is_none());
    }

    #[test]
    fn start_clears_previous_outcome() {
        let mut tracker = SubmissionTracker::new();
        let first = tracker.start(payload());
        tracker.finish(&first, Ok(response(1150)));

        tracker.start(payload());
        assert_eq!(
            tracker.status(),
            &SubmissionStatus {
                loading: true,
                result: None,
                error: None
            }
        );
    }

    #[test]
    fn stale_outcome_is_dropped() {
        let mut tracker = SubmissionTracker::new();
        let first = tracker.start(payload());
        let second = tracker.start(payload());

        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));

        // First response arrives late, after the second was started
        assert!(!tracker.finish(&first, Ok(response(1))));
        assert!(tracker.status().loading);
        assert!(tracker.status().result.is_none());

        assert!(tracker.finish(&second, Ok(response(2))));
        assert_eq!(tracker.status().result.as_ref().unwrap().data.total_amount, 2);
    }

    #[test]
    fn stale_outcome_after_latest_finished_is_dropped() {
        let mut tracker = SubmissionTracker::new();
        let first = tracker.start(payload());
        let second = tracker.start(payload());

        tracker.finish(&second, Ok(response(2)));
        assert!(!tracker.finish(
            &first,
            Err(ClientError::ServerFault {
                message: "late".into()
            })
        ));

        assert_eq!(tracker.status().result.as_ref().unwrap().data.total_amount, 2);
        assert!(tracker.status().error.is_none());
    }
}
