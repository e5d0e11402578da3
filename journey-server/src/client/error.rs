//! Client error types.

/// Shown to the user when the service cannot be reached.
const CONNECTION_FAILED_MESSAGE: &str = "Server connection failed. Is the backend running?";

/// Errors from submitting an itinerary.
///
/// Kept as plain messages so a failed outcome can be stored in the
/// selection store's status and compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never got a response (refused, unreachable, timed out)
    #[error("connection failed: {message}")]
    ConnectionFailed { message: String },

    /// The service rejected the itinerary as incomplete (HTTP 400)
    #[error("rejected: {message}")]
    Rejected { message: String },

    /// The service failed while costing the itinerary (HTTP 5xx)
    #[error("server fault: {message}")]
    ServerFault { message: String },

    /// The service answered with something we don't understand
    #[error("unexpected response {status}: {message}")]
    UnexpectedResponse { status: u16, message: String },

    /// The HTTP client could not be built
    #[error("client setup failed: {message}")]
    Setup { message: String },
}

impl ClientError {
    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> &str {
        match self {
            ClientError::ConnectionFailed { .. } => CONNECTION_FAILED_MESSAGE,
            ClientError::Rejected { message } | ClientError::ServerFault { message } => message,
            ClientError::UnexpectedResponse { message, .. } | ClientError::Setup { message } => {
                message
            }
        }
    }

    /// Returns true if the service was never reached.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, ClientError::ConnectionFailed { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            ClientError::UnexpectedResponse {
                status: err.status().map_or(0, |s| s.as_u16()),
                message: err.to_string(),
            }
        } else if err.is_builder() {
            ClientError::Setup {
                message: err.to_string(),
            }
        } else {
            ClientError::ConnectionFailed {
                message: err.to_string(),
            }
        }
    }
}
