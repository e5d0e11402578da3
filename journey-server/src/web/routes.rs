//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::domain::Catalog;
use crate::estimate::EstimateError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `cors_origin` is the one browser origin allowed to call the API.
pub fn create_router(state: AppState, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/catalog", get(catalog))
        .route("/submit-form", post(submit_form))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The reference dataset.
async fn catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}

/// Estimate the cost of a submitted itinerary.
async fn submit_form(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EstimateResponse>, AppError> {
    // Parse by hand so a missing Content-Type or odd field types still
    // reach validation instead of being rejected by the extractor
    let body: Value = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Submission body is not JSON");
        AppError::InvalidRequest
    })?;

    let result = state.estimator.estimate_json(&body)?;

    info!(
        reference_id = %result.reference_id,
        total = result.total_amount(),
        "Itinerary estimated"
    );

    Ok(Json(EstimateResponse::from_result(&result)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The submission is incomplete or unreadable
    InvalidRequest,
    /// Costing failed; `cause` is for the logs only
    Internal { cause: String },
}

impl From<EstimateError> for AppError {
    fn from(e: EstimateError) -> Self {
        match e {
            EstimateError::MissingField => AppError::InvalidRequest,
            EstimateError::Internal(cause) => AppError::Internal { cause },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidRequest => {
                debug!("Rejected submission with missing parameters");
                (StatusCode::BAD_REQUEST, MISSING_PARAMETERS_MESSAGE)
            }
            AppError::Internal { cause } => {
                error!(%cause, "Failed to estimate itinerary");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Json(FailureResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingTable;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::json;
    use tower::ServiceExt;

    fn router() -> Router {
        let state = AppState::new(Catalog::builtin(), PricingTable::builtin());
        create_router(state, HeaderValue::from_static("http://localhost:3000"))
    }

    async fn post_json(body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/submit-form")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn submit(body: Value) -> (StatusCode, Value) {
        post_json(body.to_string()).await
    }

    #[tokio::test]
    async fn health_ok() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn catalog_lists_regions() {
        let request = Request::builder().uri("/catalog").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["regions"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn two_places_by_car() {
        let (status, json) = submit(json!({
            "selectedState": "Karnataka",
            "selectedCity": "Bangalore",
            "selectedPlaces": ["Lalbagh Botanical Garden", "Bangalore Palace"],
            "selectedTransport": "Car"
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Itinerary processed successfully.");
        assert_eq!(json["journeyCost"], "Estimated Total: ₹1,250");
        assert_eq!(json["data"]["baseCurrency"], "INR");
        assert_eq!(json["data"]["totalAmount"], 1250);
        assert_eq!(json["thankYouMessage"], THANK_YOU_MESSAGE);
    }

    #[tokio::test]
    async fn bicycle_only() {
        let (status, json) = submit(json!({
            "selectedState": "Karnataka",
            "selectedCity": "Bangalore",
            "selectedPlaces": [],
            "selectedTransport": "Bicycle"
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["totalAmount"], 50);
    }

    #[tokio::test]
    async fn unknown_names_cost_nothing() {
        let (status, json) = submit(json!({
            "selectedState": "Karnataka",
            "selectedCity": "Bangalore",
            "selectedPlaces": ["Unknown Place"],
            "selectedTransport": "UnknownMode"
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["totalAmount"], 0);
    }

    #[tokio::test]
    async fn missing_transport_is_bad_request() {
        let (status, json) = submit(json!({
            "selectedState": "Karnataka",
            "selectedCity": "Bangalore",
            "selectedPlaces": ["Bangalore Palace"]
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            json!({"success": false, "message": MISSING_PARAMETERS_MESSAGE})
        );
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn null_state_is_bad_request() {
        let (status, _) = submit(json!({
            "selectedState": null,
            "selectedCity": "Bangalore",
            "selectedPlaces": [],
            "selectedTransport": "Car"
        }))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_places_is_internal_error() {
        let (status, json) = submit(json!({
            "selectedState": "Karnataka",
            "selectedCity": "Bangalore",
            "selectedPlaces": 12,
            "selectedTransport": "Car"
        }))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
        // The cause stays in the logs
        assert!(!json.to_string().contains("not an array"));
    }

    #[tokio::test]
    async fn null_places_is_internal_error() {
        let (status, json) = submit(json!({
            "selectedState": "Karnataka",
            "selectedCity": "Bangalore",
            "selectedPlaces": null,
            "selectedTransport": "Car"
        }))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn numeric_names_cost_nothing() {
        let (status, json) = submit(json!({
            "selectedState": "Karnataka",
            "selectedCity": "Bangalore",
            "selectedPlaces": ["Lalbagh Botanical Garden", 5],
            "selectedTransport": 7
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["totalAmount"], 100);
    }

    #[tokio::test]
    async fn unparseable_body_is_bad_request() {
        let (status, json) = post_json("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], MISSING_PARAMETERS_MESSAGE);
    }

    #[tokio::test]
    async fn reference_ids_vary_but_totals_do_not() {
        let body = json!({
            "selectedState": "Karnataka",
            "selectedCity": "Mysore",
            "selectedPlaces": ["Mysore Palace"],
            "selectedTransport": "Bus"
        });

        let (_, first) = submit(body.clone()).await;
        let (_, second) = submit(body).await;

        assert_eq!(first["data"]["totalAmount"], 600);
        assert_eq!(first["data"]["totalAmount"], second["data"]["totalAmount"]);
        assert_ne!(first["data"]["referenceId"], second["data"]["referenceId"]);
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/submit-form")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:3000"))
        );
    }

    #[tokio::test]
    async fn cors_never_echoes_other_origins() {
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://evil.test")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();

        let allowed = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN);
        assert_eq!(
            allowed,
            Some(&HeaderValue::from_static("http://localhost:3000"))
        );
        assert_ne!(allowed, Some(&HeaderValue::from_static("http://evil.test")));
    }
}
