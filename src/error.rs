//! Error types for the HTTP API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body returned for every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced by route handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown id on lookup or update
    #[error("{0}")]
    NotFound(String),

    /// Missing or malformed field in a mutation request
    #[error("{0}")]
    Validation(String),

    /// Unexpected failure while assembling a response.
    /// Only `public` is sent to the caller.
    #[error("{public}: {detail}")]
    Upstream { public: &'static str, detail: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to send to clients
    pub fn public_message(&self) -> String {
        match self {
            ApiError::NotFound(msg) | ApiError::Validation(msg) => msg.clone(),
            ApiError::Upstream { public, .. } => (*public).to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Upstream { public, detail } = &self {
            tracing::error!(detail = %detail, "{}", public);
        }

        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type for route handlers
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("Node not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Validation("Status is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Upstream {
                public: "Error fetching dashboard data",
                detail: "boom".into()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_detail_is_not_public() {
        let err = ApiError::Upstream {
            public: "Error fetching dashboard data",
            detail: "serializer exploded at field gems".into(),
        };
        assert_eq!(err.public_message(), "Error fetching dashboard data");
        assert!(err.to_string().contains("serializer exploded"));
    }
}
