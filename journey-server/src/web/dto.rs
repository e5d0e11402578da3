//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::CURRENCY;
use crate::estimate::EstimateResult;

/// Message for a submission missing state, city or transport.
pub const MISSING_PARAMETERS_MESSAGE: &str =
    "Invalid Request: Missing required itinerary parameters.";

/// Message for any failure while costing. The cause is never sent.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An internal error occurred while calculating your itinerary.";

/// Follow-up text on every successful estimate.
pub const THANK_YOU_MESSAGE: &str =
    "A service coordinator will review your itinerary and contact you shortly.";

/// Response for a successful estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    /// Always true
    pub success: bool,

    /// Outcome message
    pub message: String,

    /// Formatted total, e.g. "Estimated Total: ₹1,350"
    pub journey_cost: String,

    /// Machine-readable figures
    pub data: EstimateData,

    /// What happens next
    pub thank_you_message: String,
}

/// Figures in a successful estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateData {
    /// Always "INR"
    pub base_currency: String,

    /// Total in whole rupees
    pub total_amount: u64,

    /// Correlation handle for this submission
    pub reference_id: String,
}

/// Response for a rejected or failed estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    /// Always false
    pub success: bool,

    /// Fixed, human-readable reason
    pub message: String,
}

impl FailureResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl EstimateResponse {
    /// Create from a domain EstimateResult.
    pub fn from_result(result: &EstimateResult) -> Self {
        Self {
            success: true,
            message: result.message.clone(),
            journey_cost: format!("Estimated Total: {}", result.total),
            data: EstimateData {
                base_currency: CURRENCY.to_string(),
                total_amount: result.total_amount(),
                reference_id: result.reference_id.to_string(),
            },
            thank_you_message: THANK_YOU_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Inr;
    use crate::estimate::ReferenceId;
    use serde_json::json;

    fn result(total: u64) -> EstimateResult {
        EstimateResult {
            total: Inr(total),
            reference_id: ReferenceId::generate(),
            message: "Itinerary processed successfully.".into(),
        }
    }

    #[test]
    fn response_from_result() {
        let result = result(1350);
        let response = EstimateResponse::from_result(&result);

        assert!(response.success);
        assert_eq!(response.message, "Itinerary processed successfully.");
        assert_eq!(response.journey_cost, "Estimated Total: ₹1,350");
        assert_eq!(response.data.base_currency, "INR");
        assert_eq!(response.data.total_amount, 1350);
        assert_eq!(response.data.reference_id, result.reference_id.as_str());
        assert_eq!(response.thank_you_message, THANK_YOU_MESSAGE);
    }

    #[test]
    fn large_totals_use_indian_grouping() {
        let response = EstimateResponse::from_result(&result(250_000));
        assert_eq!(response.journey_cost, "Estimated Total: ₹2,50,000");
    }

    #[test]
    fn success_wire_shape() {
        let response = EstimateResponse::from_result(&result(50));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["journeyCost"], "Estimated Total: ₹50");
        assert_eq!(json["data"]["baseCurrency"], "INR");
        assert_eq!(json["data"]["totalAmount"], 50);
        assert!(json["data"]["referenceId"].as_str().unwrap().starts_with("PMJ-"));
        assert_eq!(json["thankYouMessage"], THANK_YOU_MESSAGE);
    }

    #[test]
    fn failure_wire_shape() {
        let json = serde_json::to_value(FailureResponse::new(MISSING_PARAMETERS_MESSAGE)).unwrap();
        assert_eq!(
            json,
            json!({
                "success": false,
                "message": "Invalid Request: Missing required itinerary parameters."
            })
        );
    }
}
