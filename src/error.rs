//! Error types for the voting summary proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Message returned when `_proposal_id` is absent or empty.
pub const MISSING_PROPOSAL_ID: &str = "Proposal ID is required";

/// Summary returned when the upstream provider answers with a failure status.
pub const UPSTREAM_FAILURE: &str = "Failed to fetch voting summary from Koios API";

/// Summary returned for network, decode and other unexpected failures.
pub const INTERNAL_FAILURE: &str = "Internal server error";

// == Proxy Error Enum ==
/// Errors surfaced by the voting summary proxy to its callers.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Missing or empty proposal identifier
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream answered with a non-success status
    #[error("Upstream error for {proposal_id}: {details}")]
    Upstream {
        proposal_id: String,
        status: u16,
        details: String,
        body: String,
    },

    /// Network failure, timeout or malformed upstream body
    #[error("Internal error for {proposal_id}: {details}")]
    Internal {
        proposal_id: String,
        details: String,
    },
}

impl ProxyError {
    /// Wraps a fetch failure with the proposal it was issued for.
    pub fn from_fetch(proposal_id: &str, err: FetchError) -> Self {
        match err {
            FetchError::Status {
                status,
                reason,
                body,
            } => ProxyError::Upstream {
                proposal_id: proposal_id.to_string(),
                status,
                details: format!("HTTP {}: {}", status, reason),
                body,
            },
            other => ProxyError::Internal {
                proposal_id: proposal_id.to_string(),
                details: other.to_string(),
            },
        }
    }

    /// HTTP status the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            ProxyError::InvalidRequest(msg) => ErrorResponse::new(msg),
            ProxyError::Upstream {
                proposal_id,
                details,
                ..
            } => ErrorResponse::new(UPSTREAM_FAILURE).with_details(details, proposal_id),
            ProxyError::Internal {
                proposal_id,
                details,
            } => ErrorResponse::new(INTERNAL_FAILURE).with_details(details, proposal_id),
        };

        (status, Json(body)).into_response()
    }
}

// == Fetch Error Enum ==
/// Failures of a single upstream fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Upstream responded with a status outside 2xx
    #[error("HTTP {status}: {reason}")]
    Status {
        status: u16,
        reason: String,
        body: String,
    },

    /// Connection failure or timeout
    #[error("{0}")]
    Transport(String),

    /// Response body was not valid JSON
    #[error("Failed to parse upstream response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Transport("Request to upstream timed out".to_string())
        } else if err.is_connect() {
            FetchError::Transport("Failed to connect to upstream".to_string())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_becomes_upstream() {
        let err = ProxyError::from_fetch(
            "gov_action1abc",
            FetchError::Status {
                status: 503,
                reason: "Service Unavailable".to_string(),
                body: "maintenance".to_string(),
            },
        );

        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        match err {
            ProxyError::Upstream { details, body, .. } => {
                assert_eq!(details, "HTTP 503: Service Unavailable");
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_transport_error_becomes_internal() {
        let err = ProxyError::from_fetch(
            "gov_action1abc",
            FetchError::Transport("Request to upstream timed out".to_string()),
        );

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_decode_error_becomes_internal() {
        let err = ProxyError::from_fetch("p", FetchError::Decode("expected value".to_string()));
        assert!(matches!(err, ProxyError::Internal { .. }));
    }

    #[test]
    fn test_invalid_request_status() {
        let err = ProxyError::InvalidRequest(MISSING_PROPOSAL_ID.to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unrepresentable_upstream_status_maps_to_bad_gateway() {
        let err = ProxyError::Upstream {
            proposal_id: "p".to_string(),
            status: 42,
            details: "HTTP 42: ".to_string(),
            body: String::new(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
