//! Estimation service HTTP client.

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::domain::Catalog;
use crate::estimate::ItineraryPayload;
use crate::web::{EstimateResponse, FailureResponse};

use super::error::ClientError;

/// Default base URL for a locally running service.
const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest slice of an unparseable body kept in an error.
const MAX_BODY_IN_ERROR: usize = 500;

/// Configuration for the estimation client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the estimation service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Whether to honour HTTP_PROXY and friends
    pub use_system_proxy: bool,
}

impl ClientConfig {
    /// Create a config pointing at the given service.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            use_system_proxy: true,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Connect directly, ignoring proxy environment variables.
    pub fn without_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the estimation service.
#[derive(Debug, Clone)]
pub struct EstimateClient {
    http: reqwest::Client,
    base_url: String,
}

impl EstimateClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder =
            reqwest::Client::builder().timeout(std::time::Duration::from_secs(config.timeout_secs));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let http = builder
            .build()
            .map_err(|e| ClientError::Setup {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submit an itinerary for estimation.
    ///
    /// A 400 becomes [`ClientError::Rejected`], a 5xx becomes
    /// [`ClientError::ServerFault`], and no response at all becomes
    /// [`ClientError::ConnectionFailed`].
    pub async fn submit(
        &self,
        payload: &ItineraryPayload,
    ) -> Result<EstimateResponse, ClientError> {
        let url = format!("{}/submit-form", self.base_url);

        let response = self.http.post(&url).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), "Estimation service responded");

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| ClientError::UnexpectedResponse {
                status: status.as_u16(),
                message: format!("{e} (body: {})", truncate(&body)),
            });
        }

        let message = failure_message(&body);
        if status == StatusCode::BAD_REQUEST {
            Err(ClientError::Rejected { message })
        } else if status.is_server_error() {
            warn!(status = status.as_u16(), %message, "Estimation service fault");
            Err(ClientError::ServerFault { message })
        } else {
            Err(ClientError::UnexpectedResponse {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Fetch the reference dataset the service is using.
    pub async fn fetch_catalog(&self) -> Result<Catalog, ClientError> {
        let url = format!("{}/catalog", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::UnexpectedResponse {
                status: status.as_u16(),
                message: truncate(&body),
            });
        }

        Ok(response.json().await?)
    }
}

/// The `message` of a failure body, or the raw body if it isn't one.
fn failure_message(body: &str) -> String {
    serde_json::from_str::<FailureResponse>(body)
        .map(|f| f.message)
        .unwrap_or_else(|_| truncate(body))
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_BODY_IN_ERROR).collect()
}
